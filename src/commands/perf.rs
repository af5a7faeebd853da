use anyhow::Result;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::DiskgaugeConfig;
use crate::core::PerformanceScore;
use crate::errors::DiskgaugeError;
use crate::io::real::{LsblkLister, SmartctlProvider, StdinSelector};
use crate::io::traits::ReportProvider;
use crate::io::{create_writer, ScoreReport};
use crate::progress::{GaugeConfig, GaugeSpec, Presenter, RetroGauge};
use crate::scoring::score_performance;

pub struct PerfConfig {
    pub device: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub smartctl_path: Option<PathBuf>,
}

pub fn handle_perf(config: PerfConfig) -> Result<()> {
    let settings = crate::config::load();
    let provider =
        SmartctlProvider::locate(&super::health::smartctl_path(&config.smartctl_path, &settings))?;
    let device = super::resolve_device(
        config.device.as_deref(),
        &LsblkLister::new(),
        &StdinSelector::new(),
    )?;

    println!("Running SMART test on {device}...");
    let score = score_device(&provider, &device)?;
    log::info!("performance for {device}: {}%", score.percentage);

    render(&device, score, &config, &settings)
}

/// Fetch the device's report and score it.
pub fn score_device<P: ReportProvider>(
    provider: &P,
    device: &str,
) -> Result<PerformanceScore, DiskgaugeError> {
    Ok(score_performance(&provider.fetch_report(device)?))
}

fn render(
    device: &str,
    score: PerformanceScore,
    config: &PerfConfig,
    settings: &DiskgaugeConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            let report = ScoreReport::performance(device, score);
            let mut writer = create_writer(config.output.as_deref())?;
            writer.write_report(&report)?;
        }
        OutputFormat::Terminal => {
            let gauge = RetroGauge::new(GaugeConfig::from_env(
                config.plain || settings.display.plain,
                settings.display.bar_width,
            ));
            gauge.present(&GaugeSpec::performance(&score))?;
        }
    }
    Ok(())
}

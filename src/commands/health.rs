use anyhow::Result;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::DiskgaugeConfig;
use crate::core::HealthScore;
use crate::errors::DiskgaugeError;
use crate::io::real::{LsblkLister, SmartctlProvider, StdinSelector};
use crate::io::traits::ReportProvider;
use crate::io::{create_writer, ScoreReport};
use crate::progress::{GaugeConfig, GaugeSpec, Presenter, RetroGauge};
use crate::scoring::score_health;

pub struct HealthConfig {
    pub device: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
    pub smartctl_path: Option<PathBuf>,
}

pub fn handle_health(config: HealthConfig) -> Result<()> {
    let settings = crate::config::load();
    let provider = SmartctlProvider::locate(&smartctl_path(&config.smartctl_path, &settings))?;
    let device = super::resolve_device(
        config.device.as_deref(),
        &LsblkLister::new(),
        &StdinSelector::new(),
    )?;

    println!("Running SMART test on {device}...");
    let score = score_device(&provider, &device)?;
    log::info!("health for {device}: {} ({}%)", score.status, score.percentage);

    render(&device, score, &config, &settings)
}

/// Fetch the device's report and score it. Scoring itself cannot fail;
/// the only failure mode is the report provider.
pub fn score_device<P: ReportProvider>(
    provider: &P,
    device: &str,
) -> Result<HealthScore, DiskgaugeError> {
    Ok(score_health(&provider.fetch_report(device)?))
}

pub(crate) fn smartctl_path(
    flag: &Option<PathBuf>,
    settings: &DiskgaugeConfig,
) -> PathBuf {
    flag.clone()
        .or_else(|| settings.tools.smartctl_path.clone())
        .unwrap_or_else(|| PathBuf::from("smartctl"))
}

fn render(
    device: &str,
    score: HealthScore,
    config: &HealthConfig,
    settings: &DiskgaugeConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            let report = ScoreReport::health(device, score);
            let mut writer = create_writer(config.output.as_deref())?;
            writer.write_report(&report)?;
        }
        OutputFormat::Terminal => {
            let gauge = RetroGauge::new(GaugeConfig::from_env(
                config.plain || settings.display.plain,
                settings.display.bar_width,
            ));
            gauge.present(&GaugeSpec::health(&score))?;
        }
    }
    Ok(())
}

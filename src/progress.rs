//! Terminal presentation of a score: retro animation plus progress bar.
//!
//! Rendering is decoupled from scoring behind the [`Presenter`] trait.
//! The production presenter redraws a fixed set of ASCII frames on a
//! timer above an `indicatif` progress bar pinned to the score.
//!
//! # Display behavior
//!
//! - **Plain mode**: one summary line and a static bar (respects the
//!   `DISKGAUGE_QUIET` env var and the `--plain` flag)
//! - **Non-TTY**: animation is disabled for CI and piped output; the
//!   summary and bar are still printed once

use std::io::IsTerminal;
use std::time::Duration;

use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::core::{HealthScore, HealthStatus, PerformanceScore};
use crate::errors::DiskgaugeError;

pub const DEFAULT_BAR_WIDTH: usize = 30;

const ANIMATION_CYCLES: usize = 10;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

const FRAMES: [&str; 4] = [
    "  _______  \n /       \\ \n|         |\n \\_______/ ",
    "  _______  \n /       \\ \n|  O   O  |\n \\_______/ ",
    "  _______  \n /       \\ \n|  -   -  |\n \\_______/ ",
    "  _______  \n /       \\ \n|  ^   ^  |\n \\_______/ ",
];

/// What the presenter renders: a headline, its color, and the score.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub headline: String,
    pub color: Color,
    pub percentage: u8,
}

impl GaugeSpec {
    pub fn health(score: &HealthScore) -> Self {
        Self {
            headline: format!(
                "Drive Health: {} ({}%)",
                score.status.as_str().to_uppercase(),
                score.percentage
            ),
            color: status_color(score.status),
            percentage: score.percentage,
        }
    }

    pub fn performance(score: &PerformanceScore) -> Self {
        Self {
            headline: format!("Disk Performance: {}%", score.percentage),
            color: Color::Blue,
            percentage: score.percentage,
        }
    }
}

fn status_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Healthy => Color::Green,
        HealthStatus::Failing => Color::Red,
        HealthStatus::Unknown => Color::Yellow,
    }
}

/// Renders a scored result to the user.
pub trait Presenter {
    fn present(&self, spec: &GaugeSpec) -> Result<(), DiskgaugeError>;
}

/// Configuration for presentation behavior.
#[derive(Debug, Clone)]
pub struct GaugeConfig {
    /// Skip the animation and print a single static rendering
    pub plain: bool,
    /// Progress bar width in cells
    pub bar_width: usize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            plain: false,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl GaugeConfig {
    /// Merge the CLI/config plain flag with the `DISKGAUGE_QUIET` env var.
    pub fn from_env(plain: bool, bar_width: usize) -> Self {
        let env_quiet = std::env::var("DISKGAUGE_QUIET").is_ok();
        Self {
            plain: plain || env_quiet,
            bar_width,
        }
    }
}

/// Production presenter: looping frame animation over an indicatif bar.
#[derive(Debug, Clone, Default)]
pub struct RetroGauge {
    config: GaugeConfig,
}

impl RetroGauge {
    pub fn new(config: GaugeConfig) -> Self {
        Self { config }
    }

    fn should_animate(&self) -> bool {
        !self.config.plain && std::io::stdout().is_terminal()
    }

    fn animate(&self, spec: &GaugeSpec) {
        let template = format!("{{prefix}}\n[{{bar:{}}}] {{percent}}%", self.config.bar_width);
        let style = ProgressStyle::with_template(&template)
            .expect("static template")
            .progress_chars("██░");
        let bar = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::stdout())
            .with_style(style);
        bar.set_position(u64::from(spec.percentage));

        for _ in 0..ANIMATION_CYCLES {
            for frame in FRAMES {
                bar.set_prefix(frame.color(spec.color).to_string());
                std::thread::sleep(FRAME_INTERVAL);
            }
        }
        bar.abandon();
    }
}

impl Presenter for RetroGauge {
    fn present(&self, spec: &GaugeSpec) -> Result<(), DiskgaugeError> {
        println!("{}", spec.headline.as_str().color(spec.color));

        if self.should_animate() {
            self.animate(spec);
        } else {
            println!(
                "\n[{}] {}%",
                format_bar(spec.percentage, self.config.bar_width),
                spec.percentage
            );
        }
        Ok(())
    }
}

/// Static text bar: filled `█` cells, `░` for the remainder.
pub fn format_bar(percentage: u8, width: usize) -> String {
    let filled = usize::from(percentage) * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

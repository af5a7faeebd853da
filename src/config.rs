//! Optional `.diskgauge.toml` configuration.
//!
//! A missing file is not an error; a malformed file warns and falls
//! back to defaults. Command-line flags override anything loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::progress::DEFAULT_BAR_WIDTH;

pub const CONFIG_FILE: &str = ".diskgauge.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiskgaugeConfig {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsConfig {
    /// Path or name of the smartctl binary; resolved against PATH
    pub smartctl_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Force plain output (no animation, single static bar)
    #[serde(default)]
    pub plain: bool,
    /// Progress bar width in cells
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            plain: false,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

/// Load configuration from `.diskgauge.toml` in the working directory,
/// falling back to defaults when absent or unreadable.
pub fn load() -> DiskgaugeConfig {
    try_load_from(Path::new(CONFIG_FILE)).unwrap_or_default()
}

/// Pure function to parse and validate config from TOML contents.
pub fn parse_config(contents: &str) -> Result<DiskgaugeConfig, String> {
    let mut config = toml::from_str::<DiskgaugeConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE}: {e}"))?;

    if config.display.bar_width == 0 {
        eprintln!("Warning: display.bar_width must be positive. Using default.");
        config.display.bar_width = DEFAULT_BAR_WIDTH;
    }

    Ok(config)
}

/// Try loading config from a specific path.
pub fn try_load_from(path: &Path) -> Option<DiskgaugeConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
fn handle_read_error(path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!("Failed to read config file {}: {}", path.display(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "[tools]\nsmartctl_path = \"/opt/smartmontools/sbin/smartctl\"\n\n[display]\nplain = true\nbar_width = 40\n",
        )
        .unwrap();
        assert_eq!(
            config.tools.smartctl_path,
            Some(PathBuf::from("/opt/smartmontools/sbin/smartctl"))
        );
        assert!(config.display.plain);
        assert_eq!(config.display.bar_width, 40);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.tools.smartctl_path, None);
        assert!(!config.display.plain);
        assert_eq!(config.display.bar_width, DEFAULT_BAR_WIDTH);
    }

    #[test]
    fn test_zero_bar_width_falls_back_to_default() {
        let config = parse_config("[display]\nbar_width = 0\n").unwrap();
        assert_eq!(config.display.bar_width, DEFAULT_BAR_WIDTH);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_config("[display\nplain = ").is_err());
    }
}

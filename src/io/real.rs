//! Production implementations of the collaborator traits.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::DiagnosticReport;
use crate::errors::DiskgaugeError;
use crate::io::traits::{DeviceSelector, DiskLister, ReportProvider};

/// Lists block devices via `lsblk -d -o NAME`.
#[derive(Debug, Default, Clone)]
pub struct LsblkLister;

impl LsblkLister {
    pub fn new() -> Self {
        Self
    }
}

impl DiskLister for LsblkLister {
    fn list_disks(&self) -> Result<Vec<String>, DiskgaugeError> {
        let output = Command::new("lsblk")
            .args(["-d", "-o", "NAME"])
            .output()
            .map_err(DiskgaugeError::DiskList)?;

        if !output.status.success() {
            return Err(DiskgaugeError::DiskList(std::io::Error::other(format!(
                "lsblk exited with {}",
                output.status
            ))));
        }

        let disks = parse_lsblk_output(&String::from_utf8_lossy(&output.stdout));
        if disks.is_empty() {
            return Err(DiskgaugeError::NoDisks);
        }
        Ok(disks)
    }
}

/// Drop the NAME header row and blank lines from lsblk output.
fn parse_lsblk_output(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .skip(1)
        .map(|line| line.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Interactive selector: numbered menu on stdout, 1-based index on stdin.
#[derive(Debug, Default, Clone)]
pub struct StdinSelector;

impl StdinSelector {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceSelector for StdinSelector {
    fn select(&self, disks: &[String]) -> Result<String, DiskgaugeError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "Available disks:")?;
        for (index, disk) in disks.iter().enumerate() {
            writeln!(out, "{}: {}", index + 1, disk)?;
        }
        write!(out, "Select a disk by number: ")?;
        out.flush()?;

        let mut input = String::new();
        std::io::stdin().lock().read_line(&mut input)?;

        resolve_selection(input.trim(), disks)
    }
}

/// Map a 1-based index string onto a `/dev/` device path.
pub fn resolve_selection(input: &str, disks: &[String]) -> Result<String, DiskgaugeError> {
    let selection: usize = input
        .parse()
        .map_err(|_| DiskgaugeError::InvalidSelection(input.to_string()))?;
    if selection < 1 || selection > disks.len() {
        return Err(DiskgaugeError::InvalidSelection(input.to_string()));
    }
    Ok(format!("/dev/{}", disks[selection - 1]))
}

/// Fetches reports by running `smartctl -a <device>`.
#[derive(Debug, Clone)]
pub struct SmartctlProvider {
    smartctl: PathBuf,
}

impl SmartctlProvider {
    /// Locate the smartctl binary on PATH, or verify an explicit
    /// override from config or the command line.
    pub fn locate(tool: &Path) -> Result<Self, DiskgaugeError> {
        let smartctl = which::which(tool)?;
        log::debug!("using smartctl at {}", smartctl.display());
        Ok(Self { smartctl })
    }
}

impl ReportProvider for SmartctlProvider {
    fn fetch_report(&self, device: &str) -> Result<DiagnosticReport, DiskgaugeError> {
        let output = Command::new(&self.smartctl)
            .arg("-a")
            .arg(device)
            .output()
            .map_err(|source| DiskgaugeError::SmartctlFailed {
                device: device.to_string(),
                source,
            })?;

        // smartctl sets exit-status bits even on a successful read, so a
        // non-zero exit with output on stdout still counts as a report.
        if output.stdout.is_empty() {
            return Err(DiskgaugeError::SmartctlFailed {
                device: device.to_string(),
                source: std::io::Error::other(format!(
                    "no output, exited with {}",
                    output.status
                )),
            });
        }

        Ok(DiagnosticReport::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lsblk_output_skips_header() {
        let stdout = "NAME\nsda\nnvme0n1\n";
        assert_eq!(parse_lsblk_output(stdout), vec!["sda", "nvme0n1"]);
    }

    #[test]
    fn test_parse_lsblk_output_header_only() {
        assert!(parse_lsblk_output("NAME\n").is_empty());
    }

    #[test]
    fn test_resolve_selection_in_range() {
        let disks = vec!["sda".to_string(), "sdb".to_string()];
        assert_eq!(resolve_selection("2", &disks).unwrap(), "/dev/sdb");
    }

    #[test]
    fn test_resolve_selection_rejects_out_of_range() {
        let disks = vec!["sda".to_string()];
        assert!(matches!(
            resolve_selection("0", &disks),
            Err(DiskgaugeError::InvalidSelection(_))
        ));
        assert!(matches!(
            resolve_selection("2", &disks),
            Err(DiskgaugeError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_resolve_selection_rejects_non_numeric() {
        let disks = vec!["sda".to_string()];
        assert!(matches!(
            resolve_selection("x", &disks),
            Err(DiskgaugeError::InvalidSelection(_))
        ));
    }
}

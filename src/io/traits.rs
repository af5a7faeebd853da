//! Collaborator seams for the diagnostics pipeline.
//!
//! The scoring engine is pure; everything around it (enumerating
//! devices, prompting the user, shelling out to the SMART tool) sits
//! behind these traits so commands can be driven end to end in tests
//! with mock implementations. Production implementations live in
//! [`crate::io::real`].

use crate::core::DiagnosticReport;
use crate::errors::DiskgaugeError;

/// Enumerates the block devices visible on this machine.
pub trait DiskLister {
    /// Bare device names (e.g. `sda`, `nvme0n1`), without the `/dev/`
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns `DiskgaugeError::DiskList` if enumeration itself fails
    /// and `DiskgaugeError::NoDisks` if it succeeds but finds nothing.
    fn list_disks(&self) -> Result<Vec<String>, DiskgaugeError>;
}

/// Resolves one device from a list of candidates.
pub trait DeviceSelector {
    /// Returns the chosen device path (with the `/dev/` prefix).
    ///
    /// # Errors
    ///
    /// Returns `DiskgaugeError::InvalidSelection` when the choice does
    /// not resolve to one of the candidates.
    fn select(&self, disks: &[String]) -> Result<String, DiskgaugeError>;
}

/// Produces the raw diagnostic report for a device.
pub trait ReportProvider {
    /// Runs the diagnostics tool against `device` and captures its
    /// textual output.
    ///
    /// # Errors
    ///
    /// Returns `DiskgaugeError::SmartctlFailed` when the tool cannot be
    /// spawned or produces no report.
    fn fetch_report(&self, device: &str) -> Result<DiagnosticReport, DiskgaugeError>;
}

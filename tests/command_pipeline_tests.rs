//! Drive the command pipeline end to end with mock collaborators.

use diskgauge::commands::{health, perf, resolve_device};
use diskgauge::core::DiagnosticReport;
use diskgauge::errors::DiskgaugeError;
use diskgauge::io::traits::{DeviceSelector, DiskLister, ReportProvider};
use diskgauge::{HealthScore, HealthStatus};

struct FixedLister(Vec<String>);

impl DiskLister for FixedLister {
    fn list_disks(&self) -> Result<Vec<String>, DiskgaugeError> {
        if self.0.is_empty() {
            return Err(DiskgaugeError::NoDisks);
        }
        Ok(self.0.clone())
    }
}

struct PanicLister;

impl DiskLister for PanicLister {
    fn list_disks(&self) -> Result<Vec<String>, DiskgaugeError> {
        panic!("listing must not happen when a device is given explicitly");
    }
}

struct FirstSelector;

impl DeviceSelector for FirstSelector {
    fn select(&self, disks: &[String]) -> Result<String, DiskgaugeError> {
        Ok(format!("/dev/{}", disks[0]))
    }
}

struct CannedProvider(&'static str);

impl ReportProvider for CannedProvider {
    fn fetch_report(&self, _device: &str) -> Result<DiagnosticReport, DiskgaugeError> {
        Ok(DiagnosticReport::new(self.0))
    }
}

struct BrokenProvider;

impl ReportProvider for BrokenProvider {
    fn fetch_report(&self, device: &str) -> Result<DiagnosticReport, DiskgaugeError> {
        Err(DiskgaugeError::SmartctlFailed {
            device: device.to_string(),
            source: std::io::Error::other("boom"),
        })
    }
}

#[test]
fn test_explicit_device_skips_enumeration() {
    let device = resolve_device(Some("sda"), &PanicLister, &FirstSelector).unwrap();
    assert_eq!(device, "/dev/sda");

    let device = resolve_device(Some("/dev/nvme0n1"), &PanicLister, &FirstSelector).unwrap();
    assert_eq!(device, "/dev/nvme0n1");
}

#[test]
fn test_interactive_path_lists_then_selects() {
    let lister = FixedLister(vec!["sda".to_string(), "sdb".to_string()]);
    let device = resolve_device(None, &lister, &FirstSelector).unwrap();
    assert_eq!(device, "/dev/sda");
}

#[test]
fn test_empty_disk_list_propagates() {
    let result = resolve_device(None, &FixedLister(Vec::new()), &FirstSelector);
    assert!(matches!(result, Err(DiskgaugeError::NoDisks)));
}

#[test]
fn test_health_pipeline_with_canned_report() {
    let provider = CannedProvider(
        "SMART overall-health self-assessment test result: PASSED\n\
         5 Reallocated_Sector_Ct RAW_VALUE 30 WHEN_FAILED - THRESHOLD 25\n",
    );
    let score = health::score_device(&provider, "/dev/sda").unwrap();
    assert_eq!(
        score,
        HealthScore {
            status: HealthStatus::Healthy,
            percentage: 80
        }
    );
}

#[test]
fn test_perf_pipeline_with_canned_report() {
    let provider = CannedProvider(
        "Throughput Performance 80\nSeek Time Performance 10\nCommand Timeout 5\n",
    );
    let score = perf::score_device(&provider, "/dev/sda").unwrap();
    assert_eq!(score.percentage, 88);
}

#[test]
fn test_provider_failure_propagates() {
    let err = health::score_device(&BrokenProvider, "/dev/sdq").unwrap_err();
    assert!(matches!(err, DiskgaugeError::SmartctlFailed { ref device, .. } if device == "/dev/sdq"));
}

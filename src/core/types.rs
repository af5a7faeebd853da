use serde::{Deserialize, Serialize};

/// Raw diagnostic text captured from the SMART tool for one device.
///
/// The report is opaque, line-oriented text. It is produced by a
/// [`crate::io::traits::ReportProvider`], consumed by the scoring
/// functions, and discarded; nothing persists across scoring calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport(String);

impl DiagnosticReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.0.lines()
    }
}

impl From<String> for DiagnosticReport {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DiagnosticReport {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Overall drive verdict derived from the SMART self-assessment markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Report carries the PASSED marker
    Healthy,
    /// Report carries the FAILED marker
    Failing,
    /// Neither marker present
    Unknown,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Failing => "failing",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health verdict plus a 0-100 percentage.
///
/// The constructors encode the status/percentage coupling: a failing
/// drive always scores 0 and an unknown drive always scores the fixed
/// 50 sentinel. Only a healthy drive carries a computed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    pub status: HealthStatus,
    pub percentage: u8,
}

impl HealthScore {
    pub fn healthy(percentage: u8) -> Self {
        Self {
            status: HealthStatus::Healthy,
            percentage: percentage.min(100),
        }
    }

    pub fn failing() -> Self {
        Self {
            status: HealthStatus::Failing,
            percentage: 0,
        }
    }

    pub fn unknown() -> Self {
        Self {
            status: HealthStatus::Unknown,
            percentage: 50,
        }
    }
}

/// Unified "higher is better" performance percentage in 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScore {
    pub percentage: u8,
}

impl PerformanceScore {
    pub fn new(percentage: u8) -> Self {
        Self {
            percentage: percentage.min(100),
        }
    }
}

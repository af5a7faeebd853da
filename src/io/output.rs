//! Machine-readable report output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{HealthScore, HealthStatus, PerformanceScore};
use crate::errors::DiskgaugeError;

/// One scoring run, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub device: String,
    pub scored_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HealthStatus>,
    pub percentage: u8,
}

impl ScoreReport {
    pub fn health(device: &str, score: HealthScore) -> Self {
        Self {
            device: device.to_string(),
            scored_at: Utc::now(),
            status: Some(score.status),
            percentage: score.percentage,
        }
    }

    pub fn performance(device: &str, score: PerformanceScore) -> Self {
        Self {
            device: device.to_string(),
            scored_at: Utc::now(),
            status: None,
            percentage: score.percentage,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoreReport) -> Result<(), DiskgaugeError>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> Result<(), DiskgaugeError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| DiskgaugeError::Io(std::io::Error::other(e)))?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

/// JSON writer targeting stdout or a file.
pub fn create_writer(output: Option<&Path>) -> Result<Box<dyn OutputWriter>, DiskgaugeError> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| DiskgaugeError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(JsonWriter::new(file)))
        }
        None => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
    }
}

//! Error types for the I/O shell.
//!
//! The scoring engine itself is infallible: degenerate reports resolve to
//! in-range default scores instead of errors. Everything that can fail
//! lives at the edges (device enumeration, user selection, running the
//! SMART tool, writing output) and is represented here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiskgaugeError {
    /// Enumerating block devices failed (lsblk missing or errored)
    #[error("failed to list block devices: {0}")]
    DiskList(#[source] std::io::Error),

    /// Enumeration succeeded but returned no devices
    #[error("no block devices detected")]
    NoDisks,

    /// User input did not resolve to one of the listed devices
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// The SMART tool binary could not be located
    #[error("smartctl not found: {0}")]
    SmartctlNotFound(#[from] which::Error),

    /// Running the SMART tool against a device failed
    #[error("smartctl failed for {device}: {source}")]
    SmartctlFailed {
        device: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a report to a file failed
    #[error("failed to write output to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other I/O errors (stdin prompt, stdout rendering)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

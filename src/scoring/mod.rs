//! The SMART-report scoring engine.
//!
//! Two independent pipelines share one shape: scan the report line by
//! line for marker substrings, pull numbers out with fixed patterns,
//! and fold them into a bounded percentage. Both are pure functions of
//! the report text and never fail; absent or malformed signal degrades
//! to saturating defaults (50 for unknown health, 100 for "no evidence
//! of degradation").

pub mod extract;
pub mod health;
pub mod performance;

pub use health::score_health;
pub use performance::score_performance;

/// Clamp a computed value onto the hard 0-100 output range.
pub(crate) fn clamp_percentage(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

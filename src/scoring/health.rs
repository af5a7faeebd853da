//! Drive health scoring from a raw SMART report.

use crate::core::{DiagnosticReport, HealthScore};
use crate::scoring::clamp_percentage;
use crate::scoring::extract::{self, FAILED_MARKER, PASSED_MARKER};

/// Derive a health verdict and percentage from the report text.
///
/// The verdict comes from the PASSED/FAILED self-assessment markers;
/// PASSED takes precedence when both appear. A passing drive's
/// percentage is computed from the first RAW_VALUE/THRESHOLD attribute
/// line; failing is pinned to 0 and unknown to the 50 sentinel.
/// This never fails: a report with no recognizable signal scores as
/// unknown rather than erroring.
pub fn score_health(report: &DiagnosticReport) -> HealthScore {
    let text = report.as_str();
    if text.contains(PASSED_MARKER) {
        HealthScore::healthy(health_percentage(text))
    } else if text.contains(FAILED_MARKER) {
        HealthScore::failing()
    } else {
        HealthScore::unknown()
    }
}

/// Percentage for a passing drive: how far the first matched attribute's
/// raw value sits above its failure threshold, inverted onto 0-100.
///
/// A threshold of zero (including the no-attribute-line case) saturates
/// to 100 instead of dividing by zero.
fn health_percentage(text: &str) -> u8 {
    let (raw, threshold) = extract::raw_and_threshold(text).unwrap_or((0, 0));
    if threshold == 0 {
        return 100;
    }
    clamp_percentage(100 - ((raw - threshold) * 100 / threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HealthStatus;

    fn report(text: &str) -> DiagnosticReport {
        DiagnosticReport::new(text)
    }

    #[test]
    fn test_passed_with_attribute_line() {
        let r = report("SMART overall-health: PASSED\n1 Attr RAW_VALUE 30 FLAGS THRESHOLD 25\n");
        let score = score_health(&r);
        assert_eq!(score.status, HealthStatus::Healthy);
        // 100 - ((30 - 25) * 100 / 25) = 80
        assert_eq!(score.percentage, 80);
    }

    #[test]
    fn test_passed_without_attribute_line_defaults_to_100() {
        let score = score_health(&report("result: PASSED\n"));
        assert_eq!(score, HealthScore::healthy(100));
    }

    #[test]
    fn test_passed_with_zero_threshold_defaults_to_100() {
        let score = score_health(&report("PASSED\nRAW_VALUE 10 THRESHOLD 0\n"));
        assert_eq!(score.percentage, 100);
    }

    #[test]
    fn test_raw_far_above_threshold_saturates_to_zero() {
        let score = score_health(&report("PASSED\nRAW_VALUE 5000 THRESHOLD 10\n"));
        assert_eq!(score.percentage, 0, "Should clamp, not go negative");
    }

    #[test]
    fn test_raw_below_threshold_saturates_to_100() {
        let score = score_health(&report("PASSED\nRAW_VALUE 5 THRESHOLD 50\n"));
        assert_eq!(score.percentage, 100, "Should clamp, not exceed 100");
    }

    #[test]
    fn test_failed_pins_percentage_to_zero() {
        let score = score_health(&report("SMART overall-health: FAILED!\nRAW_VALUE 1 THRESHOLD 100\n"));
        assert_eq!(score, HealthScore::failing());
    }

    #[test]
    fn test_passed_wins_over_failed() {
        let score = score_health(&report("PASSED\nprevious self-test: FAILED\n"));
        assert_eq!(score.status, HealthStatus::Healthy);
    }

    #[test]
    fn test_no_markers_is_unknown() {
        assert_eq!(score_health(&report("device lacks SMART capability")), HealthScore::unknown());
        assert_eq!(score_health(&report("")), HealthScore::unknown());
    }
}

//! Drive performance scoring from a raw SMART report.

use crate::core::{DiagnosticReport, PerformanceScore};
use crate::scoring::clamp_percentage;
use crate::scoring::extract::{self, Direction, PERFORMANCE_RULES};

/// Derive a single 0-100 performance percentage from the report text.
///
/// Each line is checked against the attribute table in
/// [`crate::scoring::extract::PERFORMANCE_RULES`]; a marker line
/// contributes the first integer found on it, recorded only when
/// strictly positive (later positive values overwrite earlier ones).
/// Lower-is-better attributes are inverted before averaging so the
/// result reads uniformly as "higher is better".
///
/// No recorded attributes means no evidence of degradation, which
/// scores 100 rather than erroring.
pub fn score_performance(report: &DiagnosticReport) -> PerformanceScore {
    let mut values: [Option<i64>; PERFORMANCE_RULES.len()] = [None; PERFORMANCE_RULES.len()];

    for line in report.lines() {
        for (slot, rule) in values.iter_mut().zip(PERFORMANCE_RULES.iter()) {
            if !line.contains(rule.marker) {
                continue;
            }
            match extract::first_integer(line) {
                Some(value) if value > 0 => *slot = Some(value),
                _ => {}
            }
        }
    }

    if values.iter().all(Option::is_none) {
        return PerformanceScore::new(100);
    }

    let total: i64 = values
        .iter()
        .zip(PERFORMANCE_RULES.iter())
        .map(|(value, rule)| {
            let normalized = normalize(value.unwrap_or(0));
            match rule.direction {
                Direction::HigherIsBetter => normalized,
                Direction::LowerIsBetter => 100 - normalized,
            }
        })
        .sum();

    PerformanceScore::new(clamp_percentage(total / PERFORMANCE_RULES.len() as i64))
}

/// Clamp an attribute value onto the 0-100 scale before aggregation.
fn normalize(value: i64) -> i64 {
    value.clamp(0, 100)
}

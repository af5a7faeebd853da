//! Best-effort numeric extraction from SMART report lines.
//!
//! The report is semi-structured vendor text, so extraction is a small
//! table of marker substrings with an extraction rule per marker rather
//! than a real parser. Unmatched markers and malformed numbers never
//! error; they yield `None`/zero and the scorers fall back to their
//! saturating defaults.

use once_cell::sync::Lazy;
use regex::Regex;

/// Self-assessment verdict markers (case-sensitive, exact substrings).
pub const PASSED_MARKER: &str = "PASSED";
pub const FAILED_MARKER: &str = "FAILED";

/// Column markers on SMART attribute lines.
pub const RAW_VALUE_MARKER: &str = "RAW_VALUE";
pub const THRESHOLD_MARKER: &str = "THRESHOLD";

/// Whether a larger attribute value means a faster drive or a slower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// One performance attribute: the substring that identifies its report
/// line and how its value feeds the aggregate.
#[derive(Debug, Clone, Copy)]
pub struct AttributeRule {
    pub marker: &'static str,
    pub direction: Direction,
}

/// The three performance signals, in aggregation order. Command Timeout
/// stands in as a latency proxy.
pub const PERFORMANCE_RULES: [AttributeRule; 3] = [
    AttributeRule {
        marker: "Throughput Performance",
        direction: Direction::HigherIsBetter,
    },
    AttributeRule {
        marker: "Seek Time Performance",
        direction: Direction::LowerIsBetter,
    },
    AttributeRule {
        marker: "Command Timeout",
        direction: Direction::LowerIsBetter,
    },
];

static RAW_THRESHOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RAW_VALUE\s+(\d+).*THRESHOLD\s+(\d+)").unwrap());

static FIRST_INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Scan for the first line carrying both the RAW_VALUE and THRESHOLD
/// markers that also matches the numeric pattern, and return the pair.
///
/// The scan stops at the first line that fully matches; a line carrying
/// the markers but failing the numeric pattern does not stop it. A digit
/// run too large for `i64` is treated as malformed and parses to zero.
pub fn raw_and_threshold(text: &str) -> Option<(i64, i64)> {
    for line in text.lines() {
        if !line.contains(RAW_VALUE_MARKER) || !line.contains(THRESHOLD_MARKER) {
            continue;
        }
        if let Some(captures) = RAW_THRESHOLD_RE.captures(line) {
            let raw = parse_int(captures.get(1).map_or("", |m| m.as_str()));
            let threshold = parse_int(captures.get(2).map_or("", |m| m.as_str()));
            log::debug!("matched attribute line: raw={raw} threshold={threshold}");
            return Some((raw, threshold));
        }
    }
    None
}

/// First run of digits anywhere in the line, or `None`.
pub fn first_integer(line: &str) -> Option<i64> {
    FIRST_INT_RE
        .find(line)
        .map(|m| parse_int(m.as_str()))
}

fn parse_int(digits: &str) -> i64 {
    digits.parse().unwrap_or(0)
}

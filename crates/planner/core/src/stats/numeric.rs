//! Numeric extraction from loosely-typed stat strings.
//!
//! Two deliberately different fraction rules live here:
//!
//! - [`extract`] reads "N/D" as a leading count and drops the
//!   denominator (a "3/50" charge stat means 3 charges);
//! - [`SmiteChance`] reads "N/D" as N successes in D attempts and keeps
//!   both sides to report a percentage.
//!
//! Upstream uses the same syntax with both meanings in different stat
//! fields, so the rules must not be unified.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+").expect("leading int regex"));

/// Extract a single number from a stat value that may be absent, empty,
/// a fraction, a leading-number-plus-text string, or a plain number.
///
/// Never fails: anything unparseable degrades to 0.
pub fn extract(value: Option<&str>) -> i32 {
    let Some(raw) = value else {
        return 0;
    };
    let raw = raw.trim();
    if raw.is_empty() || raw == "0" {
        return 0;
    }

    // "N/D" is a leading count here; the denominator is display noise.
    if let Some((numerator, _)) = raw.split_once('/') {
        return numerator.trim().parse().unwrap_or(0);
    }

    if let Some(digits) = LEADING_INT.find(raw) {
        if let Ok(parsed) = digits.as_str().parse() {
            return parsed;
        }
    }

    // Last resort: general numeric parse (covers negatives and decimals).
    raw.parse::<f64>().map(|n| n as i32).unwrap_or(0)
}

/// "N in D attempts" chance parsed from a Smite stat string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmiteChance {
    pub numerator: i32,
    pub denominator: i32,
    pub percent: f64,
}

impl SmiteChance {
    /// Parse a Smite chance string.
    ///
    /// "N/D" keeps both sides and reports `100 * N / D`. A bare number N
    /// is both a raw count and a direct percentage (N/100). Garbage
    /// degrades to 0%, never an error.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some((num, den)) = raw.split_once('/') {
            let numerator: i32 = num.trim().parse().unwrap_or(0);
            let denominator: i32 = den.trim().parse().unwrap_or(0);
            // A zero or unparseable denominator cannot express a chance.
            let percent = if denominator > 0 {
                100.0 * f64::from(numerator) / f64::from(denominator)
            } else {
                0.0
            };
            Self {
                numerator,
                denominator,
                percent,
            }
        } else {
            let percent = raw.parse::<f64>().unwrap_or(0.0);
            Self {
                numerator: percent as i32,
                denominator: 100,
                percent,
            }
        }
    }
}

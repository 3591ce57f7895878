//! Field normalizers applied while a catalog is loaded.
//!
//! Numeric fields end up either as a finite non-negative number or as
//! `None` ("unknown"); unknown is never silently turned into zero here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Mis-decoded UTF-8 em-dash as it appears after a latin-1/cp1252 round trip
pub const MOJIBAKE_EM_DASH: &str = "\u{e2}\u{20ac}\u{201d}";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Replace the double-encoded em-dash with the real character
pub fn repair_mojibake(text: &str) -> String {
    text.replace(MOJIBAKE_EM_DASH, "\u{2014}")
}

/// Collapse whitespace runs into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Trimmed, repaired free-text field
pub fn clean_text(text: &str) -> String {
    repair_mojibake(text.trim())
}

/// Stipend text such as `"15,000 / month"` becomes 15000.
///
/// Thousands separators are removed and the first run of digits is taken.
/// Text without digits is unknown.
pub fn parse_stipend(raw: &str) -> Option<f64> {
    let without_separators = raw.replace(',', "");
    DIGIT_RUN
        .find(&without_separators)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Duration must be a plain number; anything else is unknown
pub fn parse_duration(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

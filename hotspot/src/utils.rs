//! Utility functions for extracting fields from scan tool output lines.
//!
//! Both platform parsers share these helpers. Each one is tolerant by
//! construction: a line that does not match simply yields `None`, which the
//! parsers translate into "keep the field's current value".

use regex::Regex;
use std::sync::OnceLock;

fn mac_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}").unwrap())
}

fn int_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-?\d+").unwrap())
}

fn float_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(\.\d+)?").unwrap())
}

fn fraction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*/\s*(\d+)").unwrap())
}

/// Extracts the first MAC-48 address in a line, normalized to
/// colon-separated uppercase hex.
pub(crate) fn first_mac(line: &str) -> Option<String> {
    mac_re()
        .find(line)
        .map(|m| m.as_str().to_uppercase().replace('-', ":"))
}

/// Extracts the first (optionally negative) integer in a string.
pub(crate) fn first_int(s: &str) -> Option<i64> {
    int_re().find(s).and_then(|m| m.as_str().parse().ok())
}

/// Extracts the first unsigned decimal number in a string.
pub(crate) fn first_float(s: &str) -> Option<f64> {
    float_re().find(s).and_then(|m| m.as_str().parse().ok())
}

/// Interprets the first `x/y` fraction in a string as a percentage.
///
/// Returns `None` when there is no fraction or the denominator is zero.
pub(crate) fn fraction_percent(s: &str) -> Option<f64> {
    let caps = fraction_re().captures(s)?;
    let num: f64 = caps.get(1)?.as_str().parse().ok()?;
    let den: f64 = caps.get(2)?.as_str().parse().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den * 100.0)
}

/// Returns the value between the first pair of double quotes.
pub(crate) fn quoted_value(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let end = start + line[start..].find('"')?;
    Some(&line[start..end])
}

/// Returns the trimmed text after the first `:` separator.
pub(crate) fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, v)| v.trim())
}

/// Returns the text following the first matching label, if any label occurs.
pub(crate) fn after_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    labels
        .iter()
        .find_map(|label| line.find(label).map(|i| &line[i + label.len()..]))
}

/// Whether the line contains any of the given labels.
pub(crate) fn has_any_label(line: &str, labels: &[&str]) -> bool {
    labels.iter().any(|label| line.contains(label))
}

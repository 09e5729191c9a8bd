//! Display formatting for counters, durations and dates.
//!
//! All helpers accept the optional raw values returned by the API and never
//! fail: absent input maps to a fixed default.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Shown when a video has no duration.
pub const UNKNOWN_DURATION: &str = "unknown";

/// Shown when a video has no (parseable) publish date.
pub const UNKNOWN_DATE: &str = "unknown";

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern is valid")
});

/// Format a counter (views, likes, comments) with K/M suffixes.
///
/// # Arguments
/// * `raw` - Counter as returned by the API (a decimal string), if present
///
/// # Returns
/// * `String` - `"0"` when absent or without leading digits, `"1.5M"` /
///   `"2.5K"` style for large values, otherwise the plain grouped integer
///
/// # Details
/// Only the leading run of digits is read, so `"12abc"` counts as 12.
/// Halves round up: 1250 is `"1.3K"`.
pub fn format_count(raw: Option<&str>) -> String {
    let Some(number) = raw.and_then(leading_number) else {
        return "0".to_string();
    };

    if number >= 1_000_000 {
        with_suffix(number, 1_000_000, 'M')
    } else if number >= 1_000 {
        with_suffix(number, 1_000, 'K')
    } else {
        group_thousands(number)
    }
}

fn leading_number(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// One decimal place, rounded half up in integer arithmetic.
fn with_suffix(number: u64, divisor: u64, suffix: char) -> String {
    let tenths = (u128::from(number) * 10 + u128::from(divisor / 2)) / u128::from(divisor);
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// Insert `,` between groups of three digits.
fn group_thousands(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format an ISO 8601 duration (`PT1H2M3S`) as `H:MM:SS` or `M:SS`.
///
/// # Arguments
/// * `raw` - Duration string from `contentDetails.duration`, if present
///
/// # Returns
/// * `String` - [`UNKNOWN_DURATION`] when absent; the input unchanged when it
///   does not contain a `PT...` period
pub fn format_duration(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_DURATION.to_string();
    };
    let Some(caps) = DURATION_RE.captures(raw) else {
        return raw.to_string();
    };

    let part = |idx: usize| -> u64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let (hours, minutes, seconds) = (part(1), part(2), part(3));

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Format a publish date as `YYYY/MM/DD`.
pub fn format_date(published_at: Option<&DateTime<Utc>>) -> String {
    published_at
        .map(|d| d.format("%Y/%m/%d").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

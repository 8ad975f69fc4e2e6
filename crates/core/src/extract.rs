//! Best-effort text heuristics over raw provider values.
//!
//! Every function here is total: malformed input degrades to a sentinel
//! (`""`, `"Unknown"`, `"Unknown Date"` or [`Resolution::Unknown`]) instead of
//! an error. The title heuristics are deliberately simple substring and
//! pattern scans, not a release-name grammar.

use chrono::{DateTime, Datelike};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde_json::Value;

/// Four-digit years in 1900-2099, without word boundaries.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(19\d{2}|20\d{2})").expect("year pattern is valid"));

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Video resolution tier detected in a release title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Uhd2160,
    Qhd1440,
    Fhd1080,
    Hd720,
    Sd480,
    Unknown,
}

impl Resolution {
    /// Quality rank used for filtering and sorting (1 = unknown/SD, 4 = 2160p).
    ///
    /// 1440p and 1080p share rank 3.
    pub fn rank(&self) -> u8 {
        match self {
            Resolution::Uhd2160 => 4,
            Resolution::Qhd1440 | Resolution::Fhd1080 => 3,
            Resolution::Hd720 | Resolution::Sd480 => 2,
            Resolution::Unknown => 1,
        }
    }

    /// Label stored in the `Resolution` column.
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Uhd2160 => "2160p",
            Resolution::Qhd1440 => "1440p",
            Resolution::Fhd1080 => "1080p",
            Resolution::Hd720 => "720p",
            Resolution::Sd480 => "480p",
            Resolution::Unknown => "",
        }
    }

    /// Inverse of [`Resolution::label`]; anything unrecognised is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "2160p" => Resolution::Uhd2160,
            "1440p" => Resolution::Qhd1440,
            "1080p" => Resolution::Fhd1080,
            "720p" => Resolution::Hd720,
            "480p" => Resolution::Sd480,
            _ => Resolution::Unknown,
        }
    }
}

/// Return the rightmost year-like substring of `title`, or `""`.
pub fn extract_year(title: &str) -> String {
    YEAR_PATTERN
        .find_iter(title)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Detect the resolution tier of `title`, highest fidelity checked first.
pub fn extract_resolution(title: &str) -> Resolution {
    let lower = title.to_lowercase();

    if lower.contains("2160p") || lower.contains("4k") || lower.contains("uhd") {
        Resolution::Uhd2160
    } else if lower.contains("1440p") {
        Resolution::Qhd1440
    } else if lower.contains("1080p") {
        Resolution::Fhd1080
    } else if lower.contains("720p") {
        Resolution::Hd720
    } else if lower.contains("480p") {
        Resolution::Sd480
    } else {
        Resolution::Unknown
    }
}

/// Whether `title` meets the quality floor (1080p-equivalent or better).
pub fn is_high_quality(title: &str) -> bool {
    extract_resolution(title).rank() >= 3
}

/// Render a byte count as a human-readable size such as `"1.23 GB"`.
///
/// Accepts JSON numbers and numeric strings. Anything else is `"Unknown"`.
pub fn format_size_bytes(value: &Value) -> String {
    let Some(mut size) = value_as_f64(value).filter(|v| v.is_finite()) else {
        return "Unknown".to_string();
    };

    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }

    format!("{:.2} PB", size)
}

/// Render a Unix timestamp (UTC) as `YYYY-MM-DD`, or with `with_time` as
/// `YYYY-MM-DD HH:MM:SS`.
///
/// Unparseable timestamps and dates outside years 1-9999 are `"Unknown Date"`.
pub fn format_date_utc(value: &Value, with_time: bool) -> String {
    let date = value_as_i64(value)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .filter(|dt| (1..=9999).contains(&dt.year()));

    match date {
        Some(dt) if with_time => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "Unknown Date".to_string(),
    }
}

/// Render a raw JSON scalar as column text.
///
/// Strings pass through, numbers use their JSON rendering and `null` becomes
/// an empty string.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Read a raw JSON scalar as an integer.
///
/// Floats truncate toward zero. Strings must hold an integer literal
/// (surrounding whitespace allowed).
pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int(s),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Read a raw JSON scalar as a float.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Parse column text as an integer, allowing surrounding whitespace.
pub fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

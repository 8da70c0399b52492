use std::time::Duration;

use thiserror::Error;

/// Error type for token lifetime parsing.
///
/// Lifetimes are parsed once at startup; any of these is fatal configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TtlError {
    #[error("Empty duration string")]
    Empty,

    #[error("Invalid duration magnitude: {0}")]
    InvalidMagnitude(String),

    #[error("Unknown duration unit: {0}")]
    UnknownUnit(String),
}

/// Parse a token lifetime string such as `"15m"` or `"24h"`.
///
/// Supported units: `s` (seconds), `m` (minutes), `h` (hours), `d` (days).
///
/// # Errors
/// * `Empty` - The string has no magnitude or unit
/// * `InvalidMagnitude` - The magnitude is not a non-negative integer, or
///   overflows when converted to seconds
/// * `UnknownUnit` - The trailing unit is not one of {s, m, h, d}
pub fn parse_ttl(value: &str) -> Result<Duration, TtlError> {
    let value = value.trim();

    // The unit is the last char, not the last byte; the magnitude is
    // everything before it.
    let (unit_index, unit) = value.char_indices().last().ok_or(TtlError::Empty)?;
    let magnitude_str = &value[..unit_index];
    if magnitude_str.is_empty() {
        return Err(TtlError::Empty);
    }

    let magnitude: u64 = magnitude_str
        .parse()
        .map_err(|_| TtlError::InvalidMagnitude(magnitude_str.to_string()))?;

    let seconds = match unit.to_ascii_lowercase() {
        's' => Some(magnitude),
        'm' => magnitude.checked_mul(60),
        'h' => magnitude.checked_mul(60 * 60),
        'd' => magnitude.checked_mul(24 * 60 * 60),
        other => return Err(TtlError::UnknownUnit(other.to_string())),
    }
    .ok_or_else(|| TtlError::InvalidMagnitude(magnitude_str.to_string()))?;

    Ok(Duration::from_secs(seconds))
}

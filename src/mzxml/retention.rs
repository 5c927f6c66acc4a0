//! Retention time attribute parsing
//!
//! mzXML writes retention times as xs:duration values such as `PT120.5S`.
//! Only the trailing unit letter is interpreted; every character other than
//! an ASCII digit or `.` is stripped before the number is parsed.

use super::MzXmlError;

/// Convert a `retentionTime` attribute value to minutes
///
/// | suffix | conversion |
/// |--------|------------|
/// | `s`    | / 60       |
/// | `m`    | unchanged  |
/// | `h`    | * 60       |
/// | other  | unchanged  |
pub fn parse_retention_time(value: &str) -> Result<f64, MzXmlError> {
    let trimmed = value.trim();
    let unit = trimmed
        .chars()
        .last()
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or(' ');

    let digits: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let number: f64 = digits.parse().map_err(|_| MzXmlError::InvalidNumber {
        field: "retentionTime",
        value: value.to_string(),
    })?;

    Ok(match unit {
        's' => number / 60.0,
        'h' => number * 60.0,
        _ => number,
    })
}

//! Per-value parsers used by schema enforcement.
//!
//! Each parser returns `None` for blank input and for anything it cannot
//! read; the caller decides whether that is a per-row null or a structural
//! error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Remove thousands separators from `value`.
///
/// Commas are only accepted in the integer part and only as separators of
/// three-digit groups, so "1,234" reads as 1234 while "3,5" is rejected.
fn strip_thousands(value: &str) -> Option<String> {
    if !value.contains(',') {
        return Some(value.to_string());
    }
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    let split = unsigned.find(['.', 'e', 'E']).unwrap_or(unsigned.len());
    let (integer, rest) = unsigned.split_at(split);
    if rest.contains(',') {
        return None;
    }

    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let mut groups = integer.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !is_digits(first) {
        return None;
    }
    if groups.any(|group| group.len() != 3 || !is_digits(group)) {
        return None;
    }
    Some(value.replace(',', ""))
}

/// Parse a decimal number.
///
/// Handles common numeric formats:
/// - Standard numbers: "123", "-45.67"
/// - Thousands separators: "1,234,567"
/// - Surrounding whitespace: "  123  "
/// - Scientific notation: "1.23e5"
///
/// Textual NaN and infinities are rejected, as are misplaced separators
/// ("3,5") and inner whitespace ("1 2").
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    strip_thousands(trimmed)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parse a whole number. Decimal notation is accepted when the fraction is
/// zero, so "3.0" reads as 3.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = strip_thousands(trimmed)?.parse::<i64>() {
        return Some(v);
    }
    let decimal = parse_decimal(trimmed)?;
    if decimal.fract() == 0.0 && decimal.abs() < 9.0e15 {
        Some(decimal as i64)
    } else {
        None
    }
}

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S", // US
];

const DATE_FORMATS: [&str; 3] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y", // US
];

/// Parse a timestamp. Offsets in RFC 3339 input are converted to UTC and
/// dropped; date-only input reads as midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    for fmt in &DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }

    None
}

/// Milliseconds since the Unix epoch, treating the value as UTC.
pub fn timestamp_millis(value: NaiveDateTime) -> i64 {
    value.and_utc().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_decimal("10.5"), Some(10.5));
        assert_eq!(parse_decimal("  -0.5 "), Some(-0.5));
        assert_eq!(parse_decimal("1,234.56"), Some(1234.56));
        assert_eq!(parse_decimal("1.5E-3"), Some(0.0015));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("nan"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_parse_decimal_thousands_groups() {
        assert_eq!(parse_decimal("12,345"), Some(12345.0));
        assert_eq!(parse_decimal("-1,234,567.5"), Some(-1_234_567.5));
        assert_eq!(parse_decimal("3,5"), None);
        assert_eq!(parse_decimal("1,23"), None);
        assert_eq!(parse_decimal(",123"), None);
        assert_eq!(parse_decimal("1.234,5"), None);
        assert_eq!(parse_decimal("1 2"), None);
        assert_eq!(parse_integer("1,000"), Some(1000));
        assert_eq!(parse_integer("10,00"), None);
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("3.0"), Some(3));
        assert_eq!(parse_integer("1,000"), Some(1000));
        assert_eq!(parse_integer("3.5"), None);
        assert_eq!(parse_integer("two"), None);
    }

    #[test]
    fn test_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T10:30"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-15T12:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("01/15/2024 10:30:00"), Some(expected));
    }

    #[test]
    fn test_timestamp_fractional_seconds() {
        let parsed = parse_timestamp("2024-01-15 10:30:00.250").unwrap();
        assert_eq!(timestamp_millis(parsed) % 1000, 250);
    }

    #[test]
    fn test_date_only_is_midnight() {
        let parsed = parse_timestamp("2024-01-15").unwrap();
        assert_eq!(parsed.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}

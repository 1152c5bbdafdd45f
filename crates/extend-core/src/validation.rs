//! Day Count Validation

use crate::error::ValidationError;

/// Upper bound accepted by the server
pub const MAX_EXTENSION_DAYS: u32 = 365;

/// Lenient integer parse of the day-count input.
///
/// Leading whitespace and a sign are accepted, then digits are read up to
/// the first non-digit ("5.5" -> 5, "7d" -> 7). Returns `None` when no digit
/// follows. Values too large for `i64` saturate.
pub fn parse_day_count(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest.bytes().take_while(u8::is_ascii_digit).count();
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Validation policy for a submission, first failure wins
pub fn validate_days(input: &str, max: u32) -> Result<u32, ValidationError> {
    let days = parse_day_count(input).ok_or(ValidationError::InvalidDayCount)?;
    if days <= 0 {
        return Err(ValidationError::NotPositive);
    }
    if days > i64::from(max) {
        return Err(ValidationError::ExceedsMaximum { max });
    }
    u32::try_from(days).map_err(|_| ValidationError::ExceedsMaximum { max })
}

/// Day count worth previewing: any positive integer.
///
/// Upper-bound errors are left to the server so its message is shown.
pub fn preview_days(input: &str) -> Option<u32> {
    parse_day_count(input)
        .filter(|days| *days > 0)
        .and_then(|days| u32::try_from(days).ok())
}

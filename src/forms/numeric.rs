//! Lenient integer parsing for numeric form fields.
//!
//! Form inputs arrive as free text. The leading signed integer is used
//! (`"4.7"` reads as 4, `"12 rows"` as 12); input with no leading digits, or
//! that reads as zero, takes the field default. Anything else is clamped.

/// Parse the leading signed integer of `raw`, ignoring surrounding
/// whitespace. Saturates instead of overflowing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Resolve a numeric field value to `[min, max]`, using `default` when the
/// input is unusable.
pub fn clamp_or_default(raw: &str, min: i64, max: i64, default: i64) -> i64 {
    match parse_leading_int(raw) {
        None | Some(0) => default,
        Some(value) => value.clamp(min, max),
    }
}

//! Tolerant numeric parsing for hand-edited spreadsheets
//!
//! Tables exported from different locales mix `.` and `,` as decimal
//! separators and use placeholder words for unknown values. [`parse_number`]
//! accepts all of them and reports anything unusable as missing.

const MISSING_TOKENS: [&str; 3] = ["na", "null", "unknown"];

/// Parses a numeric cell, returning `None` when the value is missing.
///
/// When both separators appear the later one is the decimal point and the
/// other is stripped as a thousands separator. A lone comma is a decimal
/// comma. Trailing garbage after the number is ignored (`"1200 m"` is 1200).
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || is_missing_token(s) {
        return None;
    }

    let normalized = normalize_separators(s);
    parse_leading_float(&normalized).filter(|v| v.is_finite())
}

fn is_missing_token(s: &str) -> bool {
    MISSING_TOKENS.iter().any(|t| s.eq_ignore_ascii_case(t))
}

fn normalize_separators(s: &str) -> String {
    match (s.rfind(','), s.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => s.replace('.', "").replacen(',', ".", 1),
        (Some(_), Some(_)) => s.replace(',', ""),
        (Some(_), None) => s.replacen(',', ".", 1),
        _ => s.to_string(),
    }
}

/// Parses the longest prefix of `s` that forms a decimal float.
fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("10.2"), Some(10.2));
        assert_eq!(parse_number("-33.5"), Some(-33.5));
        assert_eq!(parse_number("  1200 "), Some(1200.0));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_number("45,5"), Some(45.5));
        assert_eq!(parse_number("-0,25"), Some(-0.25));
    }

    #[test]
    fn test_mixed_separators() {
        // European thousands grouping
        assert_eq!(parse_number("1.234,5"), Some(1234.5));
        assert_eq!(parse_number("1.234.567,25"), Some(1234567.25));
        // Anglo thousands grouping
        assert_eq!(parse_number("1,234.5"), Some(1234.5));
        assert_eq!(parse_number("1,234,567.25"), Some(1234567.25));
    }

    #[test]
    fn test_missing_tokens() {
        for raw in ["", "   ", "NA", "na", "Null", "UNKNOWN", "unknown"] {
            assert_eq!(parse_number(raw), None, "{raw:?} should be missing");
        }
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("1200 m"), Some(1200.0));
        assert_eq!(parse_number("12e"), Some(12.0));
    }
}

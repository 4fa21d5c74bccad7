//! Numeric interpretation of cell text.
//!
//! Two tiers: a leading numeric literal (`"12 items"` is 12), then, if that
//! fails, the number formed by the text's digits alone (`"$1,200"` is 1200).

/// Parse the numeric literal at the start of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction (`"5."`, `".5"`), an optional exponent, or `Infinity`.
/// Parsing stops at the first character that cannot extend the literal.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            pos = end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos + 1..end];
        }
    }

    let mut literal = String::with_capacity(int_digits.len() + frac_digits.len() + 8);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }
    if !exponent.is_empty() {
        literal.push('e');
        literal.push_str(exponent.trim_start_matches('+'));
    }

    literal.parse().ok()
}

/// Parse the number formed by every ASCII digit in `text`, in order.
/// `None` when the text has no digits.
pub fn parse_digits(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Numeric value of a cell's text, if it has one.
pub fn parse_number(text: &str, digit_fallback: bool) -> Option<f64> {
    parse_leading_number(text).or_else(|| {
        if digit_fallback {
            parse_digits(text)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_literal() {
        assert_eq!(parse_leading_number("12"), Some(12.0));
        assert_eq!(parse_leading_number("12 items"), Some(12.0));
        assert_eq!(parse_leading_number("  -3.5kg"), Some(-3.5));
        assert_eq!(parse_leading_number("+7"), Some(7.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("1e3x"), Some(1000.0));
        assert_eq!(parse_leading_number("2E-2"), Some(0.02));
        assert_eq!(parse_leading_number("1e"), Some(1.0));
        assert_eq!(parse_leading_number("1,234"), Some(1.0));
        assert_eq!(parse_leading_number("0x10"), Some(0.0));
    }

    #[test]
    fn test_leading_literal_rejects() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("$12"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("infinity"), None);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_leading_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_number("-Infinity and more"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_digit_fallback() {
        assert_eq!(parse_digits("$12"), Some(12.0));
        assert_eq!(parse_digits("$1,200.50"), Some(120050.0));
        assert_eq!(parse_digits("abc"), None);
        assert_eq!(parse_number("$12", true), Some(12.0));
        assert_eq!(parse_number("$12", false), None);
        assert_eq!(parse_number("12 items", false), Some(12.0));
    }
}

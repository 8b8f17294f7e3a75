//! Lenient float extraction from formatted strings such as prices.

/// Extract a float from a human-formatted number.
///
/// The right-most `.` or `,` is treated as the decimal separator and every
/// other non-digit character is discarded, so currency symbols, thousands
/// separators and stray letters are ignored. A separator at the very first
/// byte does not count.
///
/// ```
/// use bandolier::number::to_float;
///
/// assert_eq!(to_float("$1,000.25"), 1000.25);
/// assert_eq!(to_float("abc100def.25xyz"), 100.25);
/// ```
pub fn to_float(value: &str) -> f64 {
    let dot = value.rfind('.').filter(|&pos| pos > 0);
    let comma = value.rfind(',').filter(|&pos| pos > 0);

    let separator = match (dot, comma) {
        (Some(d), Some(c)) => Some(d.max(c)),
        (Some(d), None) => Some(d),
        (None, Some(c)) => Some(c),
        (None, None) => None,
    };

    let number = match separator {
        Some(pos) => format!(
            "{}.{}",
            digits_only(&value[..pos]),
            digits_only(&value[pos + 1..])
        ),
        None => digits_only(value),
    };

    parse_or_zero(&number)
}

fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn parse_or_zero(number: &str) -> f64 {
    match number {
        "" | "." => 0.0,
        _ => number.parse().unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_number_returns_float() {
        assert_eq!(to_float("1.25"), 1.25);
        assert_eq!(to_float("$1.25"), 1.25);
        assert_eq!(to_float("$1,000.25"), 1000.25);
        assert_eq!(to_float("$1,000,000.25"), 1000000.25);
        assert_eq!(to_float("abc100def.25xyz"), 100.25);
    }

    #[test]
    fn test_comma_as_decimal_separator() {
        assert_eq!(to_float("1.000,5"), 1000.5);
        assert_eq!(to_float("12,75 EUR"), 12.75);
    }

    #[test]
    fn test_without_separator() {
        assert_eq!(to_float("42"), 42.0);
        assert_eq!(to_float("USD 300"), 300.0);
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(to_float(""), 0.0);
        assert_eq!(to_float("abc"), 0.0);
        assert_eq!(to_float("a.b"), 0.0);
    }

    #[test]
    fn test_leading_separator_is_ignored() {
        assert_eq!(to_float(".5"), 5.0);
    }
}

/// Validation utilities for amount input
///
/// Amount text is validated on write: the state never holds a source
/// amount that is not an unsigned decimal (digits with at most one dot)
/// or empty. The derivation engine only ever sees [`parse_amount`], never
/// the raw text.

/// True when `text` is empty or an unsigned decimal: digits and at most
/// one decimal point.
pub fn is_amount_text(text: &str) -> bool {
    let mut seen_dot = false;
    for c in text.chars() {
        if c == '.' {
            if seen_dot {
                return false;
            }
            seen_dot = true;
        } else if !c.is_ascii_digit() {
            return false;
        }
    }
    true
}

/// Parse validated amount text into a finite number.
///
/// Returns `None` for empty text, text that fails [`is_amount_text`], or
/// text that does not parse to a finite `f64` (a bare ".").
pub fn parse_amount(text: &str) -> Option<f64> {
    if text.is_empty() || !is_amount_text(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_text_accepts_unsigned_decimals() {
        assert!(is_amount_text(""));
        assert!(is_amount_text("0"));
        assert!(is_amount_text("42"));
        assert!(is_amount_text("3.14"));
        assert!(is_amount_text(".5"));
        assert!(is_amount_text("2."));
    }

    #[test]
    fn test_amount_text_rejects_everything_else() {
        assert!(!is_amount_text("-1"));
        assert!(!is_amount_text("+1"));
        assert!(!is_amount_text("1.2.3"));
        assert!(!is_amount_text("1e5"));
        assert!(!is_amount_text("abc"));
        assert!(!is_amount_text("1 "));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2"), Some(2.0));
        assert_eq!(parse_amount("2."), Some(2.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("-3"), None);
    }
}

//! Number formatting and parsing for the display
//!
//! Plain decimal notation, no grouping separator, a configurable decimal
//! separator and a cap on fraction digits.

use crate::core::token::Token;
use crate::core::Operation;

/// Decimal display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Character between integer and fraction digits
    pub decimal_separator: char,
    /// Maximum fraction digits shown; extra digits are rounded away
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: Self::DEFAULT_SEPARATOR,
            max_fraction_digits: Self::DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl NumberFormat {
    /// Default decimal separator
    pub const DEFAULT_SEPARATOR: char = ',';
    /// Default fraction digit cap
    pub const DEFAULT_FRACTION_DIGITS: usize = 3;
    /// Largest fraction digit cap honoured; larger values are clamped
    pub const MAX_FRACTION_DIGITS: usize = 17;

    /// Creates the default format
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decimal separator
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets the fraction digit cap, clamped to [`Self::MAX_FRACTION_DIGITS`]
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = if digits > Self::MAX_FRACTION_DIGITS {
            Self::MAX_FRACTION_DIGITS
        } else {
            digits
        };
        self
    }

    /// Formats `value` for display
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let digits = self.max_fraction_digits.min(Self::MAX_FRACTION_DIGITS);
        let mut text = format!("{value:.digits$}");
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text = "0".to_string();
        }
        if self.decimal_separator != '.' {
            text = text.replace('.', &self.decimal_separator.to_string());
        }
        text
    }

    /// Parses display text written with this format's separator
    ///
    /// Accepts an optional leading `-`, digits, and at most one separator.
    /// Anything else (grouping, exponents, `inf`) is rejected.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<f64> {
        self.parse_with(text, &[self.decimal_separator])
    }

    /// Like [`parse`](Self::parse) but also accepts `.` as the separator
    #[must_use]
    pub fn parse_lenient(&self, text: &str) -> Option<f64> {
        self.parse_with(text, &[self.decimal_separator, '.'])
    }

    /// Parses one whitespace-separated expression word into a token
    #[must_use]
    pub fn parse_token(&self, word: &str) -> Option<Token> {
        Operation::parse(word)
            .map(Token::Operator)
            .or_else(|| self.parse_lenient(word).map(Token::Number))
    }

    fn parse_with(&self, text: &str, separators: &[char]) -> Option<f64> {
        let text = text.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() {
            return None;
        }

        let mut normalized = String::with_capacity(text.len());
        if digits.len() != text.len() {
            normalized.push('-');
        }
        let mut seen_separator = false;
        for c in digits.chars() {
            if c.is_ascii_digit() {
                normalized.push(c);
            } else if separators.contains(&c) && !seen_separator {
                seen_separator = true;
                normalized.push('.');
            } else {
                return None;
            }
        }
        if normalized.trim_start_matches('-') == "." {
            return None;
        }
        normalized.parse().ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.decimal_separator, ',');
        assert_eq!(fmt.max_fraction_digits, 3);
    }

    // ===== format =====

    #[test]
    fn test_format_integer() {
        assert_eq!(NumberFormat::new().format(20.0), "20");
        assert_eq!(NumberFormat::new().format(-7.0), "-7");
    }

    #[test]
    fn test_format_fraction_uses_separator() {
        assert_eq!(NumberFormat::new().format(2.5), "2,5");
        assert_eq!(NumberFormat::new().with_separator('.').format(2.5), "2.5");
    }

    #[test]
    fn test_format_rounds_to_cap() {
        assert_eq!(NumberFormat::new().format(10.0 / 3.0), "3,333");
        assert_eq!(NumberFormat::new().format(2.0 / 3.0), "0,667");
        assert_eq!(
            NumberFormat::new().with_max_fraction_digits(1).format(0.26),
            "0,3"
        );
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(NumberFormat::new().format(1.100), "1,1");
        assert_eq!(NumberFormat::new().format(0.0001), "0");
    }

    #[test]
    fn test_format_no_negative_zero() {
        assert_eq!(NumberFormat::new().format(-0.0), "0");
        assert_eq!(NumberFormat::new().format(-0.0001), "0");
    }

    #[test]
    fn test_format_no_grouping() {
        assert_eq!(NumberFormat::new().format(1_234_567.0), "1234567");
    }

    #[test]
    fn test_format_zero_fraction_digits() {
        let fmt = NumberFormat::new().with_max_fraction_digits(0);
        assert_eq!(fmt.format(2.4), "2");
        assert_eq!(fmt.format(100.0), "100");
    }

    #[test]
    fn test_fraction_digits_clamped_by_builder() {
        let fmt = NumberFormat::new().with_max_fraction_digits(70_000);
        assert_eq!(fmt.max_fraction_digits, NumberFormat::MAX_FRACTION_DIGITS);
        assert_eq!(fmt.format(0.5), "0,5");
    }

    #[test]
    fn test_oversized_field_does_not_panic() {
        let fmt = NumberFormat {
            decimal_separator: '.',
            max_fraction_digits: usize::MAX,
        };
        assert!(fmt.format(1.0 / 3.0).starts_with("0.333"));
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(NumberFormat::new().format(f64::INFINITY), "∞");
        assert_eq!(NumberFormat::new().format(f64::NEG_INFINITY), "-∞");
        assert_eq!(NumberFormat::new().format(f64::NAN), "NaN");
    }

    // ===== parse =====

    #[test]
    fn test_parse_plain() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.parse("0"), Some(0.0));
        assert_eq!(fmt.parse("42"), Some(42.0));
        assert_eq!(fmt.parse("-5"), Some(-5.0));
    }

    #[test]
    fn test_parse_separator() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.parse("3,25"), Some(3.25));
        assert_eq!(fmt.parse("0,"), Some(0.0));
        assert_eq!(fmt.parse("12,"), Some(12.0));
        assert_eq!(fmt.parse("3.25"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.parse(""), None);
        assert_eq!(fmt.parse("-"), None);
        assert_eq!(fmt.parse(","), None);
        assert_eq!(fmt.parse("1,2,3"), None);
        assert_eq!(fmt.parse("Error"), None);
        assert_eq!(fmt.parse("inf"), None);
        assert_eq!(fmt.parse("1e5"), None);
        assert_eq!(fmt.parse("1 000"), None);
    }

    #[test]
    fn test_parse_lenient_accepts_dot() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.parse_lenient("2.5"), Some(2.5));
        assert_eq!(fmt.parse_lenient("2,5"), Some(2.5));
        assert_eq!(fmt.parse_lenient("2.5,1"), None);
    }

    #[test]
    fn test_parse_round_trips_format() {
        let fmt = NumberFormat::new();
        for value in [0.0, 1.5, -2.25, 1234.0, 0.125] {
            assert_eq!(fmt.parse(&fmt.format(value)), Some(value));
        }
    }

    // ===== parse_token =====

    #[test]
    fn test_parse_token() {
        let fmt = NumberFormat::new();
        assert_eq!(fmt.parse_token("+"), Some(Token::Operator(Operation::Add)));
        assert_eq!(
            fmt.parse_token("-"),
            Some(Token::Operator(Operation::Subtract))
        );
        assert_eq!(fmt.parse_token("-3"), Some(Token::Number(-3.0)));
        assert_eq!(fmt.parse_token("x"), Some(Token::Operator(Operation::Multiply)));
        assert_eq!(fmt.parse_token("1.5"), Some(Token::Number(1.5)));
        assert_eq!(fmt.parse_token("abc"), None);
    }
}

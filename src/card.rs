//! Card number normalization and masking.

use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum digit count accepted after normalization.
pub const MIN_DIGITS: usize = 13;

/// A normalized card number: at least [`MIN_DIGITS`] ASCII digits, no
/// separators. Construction through [`CardNumber::parse`] is the only way to
/// obtain one, so downstream code can rely on the digits-only invariant.
///
/// Implements a masked `Debug` so full card numbers never leak into logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    /// Normalize raw user input into a card number.
    ///
    /// Spaces and hyphens are stripped; anything else that is not an ASCII
    /// digit rejects the input, as does a digit count below [`MIN_DIGITS`].
    pub fn parse(raw: &str) -> Result<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CardError::InvalidCharacter(bad));
        }
        if digits.len() < MIN_DIGITS {
            return Err(CardError::TooShort(digits.len()));
        }

        Ok(Self(digits))
    }

    /// Get the underlying digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed card number; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Masked rendering for display: only the last 4 digits visible.
    pub fn masked(&self) -> String {
        mask(&self.0)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber({})", self.masked())
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

/// Replace all but the last 4 characters with `*`.
///
/// Inputs shorter than 4 characters are fully masked to a run of `*` of
/// equal length.
pub fn mask(digits: &str) -> String {
    let len = digits.chars().count();
    if len < 4 {
        return "*".repeat(len);
    }
    let visible: String = digits.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        let number = CardNumber::parse("4111111111111111").unwrap();
        assert_eq!(number.as_str(), "4111111111111111");
        assert_eq!(number.len(), 16);
    }

    #[test]
    fn test_parse_strips_spaces_and_hyphens() {
        let number = CardNumber::parse("4111 1111-1111 1111").unwrap();
        assert_eq!(number.as_str(), "4111111111111111");
    }

    #[test]
    fn test_parse_rejects_non_digit() {
        let err = CardNumber::parse("4111a11111111111").unwrap_err();
        assert!(matches!(err, CardError::InvalidCharacter('a')));
    }

    #[test]
    fn test_parse_rejects_too_short() {
        let err = CardNumber::parse("411111111111").unwrap_err();
        assert!(matches!(err, CardError::TooShort(12)));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = CardNumber::parse("").unwrap_err();
        assert!(matches!(err, CardError::TooShort(0)));
    }

    #[test]
    fn test_parse_accepts_minimum_length() {
        let number = CardNumber::parse("4222222222222").unwrap();
        assert_eq!(number.len(), 13);
    }

    #[test]
    fn test_mask_standard() {
        assert_eq!(mask("4111111111111111"), "************1111");
    }

    #[test]
    fn test_mask_short_input_fully_masked() {
        assert_eq!(mask("123"), "***");
    }

    #[test]
    fn test_mask_exactly_four() {
        assert_eq!(mask("1234"), "1234");
    }

    #[test]
    fn test_debug_never_shows_full_number() {
        let number = CardNumber::parse("5500000000000004").unwrap();
        let debug = format!("{:?}", number);
        assert!(!debug.contains("5500000000000004"));
        assert!(debug.contains("0004"));
    }
}

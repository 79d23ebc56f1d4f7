//! Card number checking: normalization, structure, checksum and network.
//!
//! [`CardClassifier`] ties the pieces together:
//!
//! 1. Strip spaces and hyphens ([`normalize`](crate::normalize::normalize))
//! 2. Require 8 to 19 ASCII digits ([`check_structure`])
//! 3. Run the Luhn checksum in the configured [`LuhnMode`]
//! 4. Look the number up in the [`RuleTable`]
//!
//! A number that fails the checksum is still classified. Only structural
//! failures are errors.

use crate::error::ValidationError;
use crate::luhn::{self, LuhnMode};
use crate::network::RuleTable;
use crate::normalize::CardNumberInput;
use crate::structure::{check_structure, MAX_CARD_DIGITS};
use std::sync::Arc;

/// Outcome of checking one card number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    normalized_number: String,
    valid: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    network: Option<String>,
}

impl ValidationResult {
    /// The number with separators removed.
    #[inline]
    pub fn normalized_number(&self) -> &str {
        &self.normalized_number
    }

    /// Whether the number passed the Luhn checksum.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The issuing network, if any rule matched.
    #[inline]
    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }
}

/// Checks and classifies card numbers against a shared rule table.
///
/// Cloning is cheap: the table is behind an `Arc`.
///
/// # Example
///
/// ```
/// use cardchecker::{CardClassifier, LuhnMode, RuleTable};
///
/// let classifier = CardClassifier::new(RuleTable::builtin()).with_luhn_mode(LuhnMode::Standard);
///
/// let result = classifier.check("5105-1051-0510-5100").unwrap();
/// assert!(result.is_valid());
/// assert_eq!(result.network(), Some("Mastercard"));
/// ```
#[derive(Debug, Clone)]
pub struct CardClassifier {
    table: Arc<RuleTable>,
    luhn_mode: LuhnMode,
}

impl CardClassifier {
    /// Creates a classifier over `table` using [`LuhnMode::Reference`].
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self {
            table,
            luhn_mode: LuhnMode::default(),
        }
    }

    /// Sets the checksum comparison rule.
    #[must_use]
    pub fn with_luhn_mode(mut self, mode: LuhnMode) -> Self {
        self.luhn_mode = mode;
        self
    }

    /// The rule table used for classification.
    #[inline]
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// The checksum comparison rule.
    #[inline]
    pub fn luhn_mode(&self) -> LuhnMode {
        self.luhn_mode
    }

    /// Checks a raw card number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFormat`] when the normalized number
    /// is not 8 to 19 ASCII digits. A failed checksum is reported through
    /// [`ValidationResult::is_valid`], not as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use cardchecker::CardClassifier;
    ///
    /// let classifier = CardClassifier::default();
    ///
    /// let result = classifier.check(" 4532-0151-1283-0366").unwrap();
    /// assert_eq!(result.normalized_number(), "4532015112830366");
    /// assert!(result.is_valid());
    /// assert_eq!(result.network(), Some("Visa"));
    ///
    /// assert!(classifier.check("12AB5678").is_err());
    /// ```
    pub fn check(&self, raw: &str) -> Result<ValidationResult, ValidationError> {
        let input = CardNumberInput::new(raw);
        check_structure(input.normalized())?;

        let valid = self.passes_checksum(input.normalized());
        let network = self.table.classify(input.normalized()).map(str::to_string);

        Ok(ValidationResult {
            normalized_number: input.into_normalized(),
            valid,
            network,
        })
    }

    /// Classifies a normalized number without checking it.
    #[inline]
    pub fn classify<'a>(&'a self, normalized: &str) -> Option<&'a str> {
        self.table.classify(normalized)
    }

    /// Runs the checksum over a structurally valid number.
    fn passes_checksum(&self, normalized: &str) -> bool {
        let mut digits = [0u8; MAX_CARD_DIGITS];
        let count = normalized.len().min(MAX_CARD_DIGITS);
        for (slot, b) in digits.iter_mut().zip(normalized.bytes()) {
            *slot = b - b'0';
        }
        luhn::validate(&digits[..count], self.luhn_mode)
    }
}

impl Default for CardClassifier {
    /// The built-in table with [`LuhnMode::Reference`].
    fn default() -> Self {
        Self::new(RuleTable::builtin())
    }
}

/// Checks a raw card number with the built-in table and default modes.
///
/// # Example
///
/// ```
/// use cardchecker::check_card_number;
///
/// let result = check_card_number("6011514433546201").unwrap();
/// assert!(result.is_valid());
/// assert_eq!(result.network(), Some("Discover Card"));
///
/// let result = check_card_number("4532015112830367").unwrap();
/// assert!(!result.is_valid());
/// assert_eq!(result.network(), Some("Visa"));
/// ```
pub fn check_card_number(raw: &str) -> Result<ValidationResult, ValidationError> {
    CardClassifier::default().check(raw)
}

/// Returns `true` if `raw` is well formed and passes the checksum.
#[inline]
pub fn is_valid(raw: &str) -> bool {
    check_card_number(raw).is_ok_and(|result| result.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatIssue;
    use crate::network::MatchOrder;

    #[test]
    fn test_known_vectors() {
        let result = check_card_number("4532015112830366").unwrap();
        assert_eq!(result.normalized_number(), "4532015112830366");
        assert!(result.is_valid());
        assert_eq!(result.network(), Some("Visa"));

        let result = check_card_number("6011514433546201").unwrap();
        assert!(result.is_valid());
        assert_eq!(result.network(), Some("Discover Card"));
    }

    #[test]
    fn test_invalid_checksum_still_classified() {
        let result = check_card_number("4532015112830367").unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.network(), Some("Visa"));
    }

    #[test]
    fn test_separators_give_identical_result() {
        let plain = check_card_number("4532015112830366").unwrap();
        let formatted = check_card_number(" 4532-0151-1283-0366").unwrap();
        assert_eq!(plain, formatted);
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            check_card_number("123").unwrap_err().issue(),
            FormatIssue::TooShort { length: 3, .. }
        ));
        assert!(matches!(
            check_card_number("12AB5678").unwrap_err().issue(),
            FormatIssue::InvalidCharacter { character: 'A', .. }
        ));
        assert!(matches!(
            check_card_number("  --  ").unwrap_err().issue(),
            FormatIssue::Empty
        ));
        assert!(check_card_number("45320151128303660000").is_err());
    }

    #[test]
    fn test_no_network() {
        let result = check_card_number("70000000").unwrap();
        assert_eq!(result.network(), None);
    }

    #[test]
    fn test_luhn_mode_changes_validity_only() {
        let reference = CardClassifier::default();
        let standard = CardClassifier::default().with_luhn_mode(LuhnMode::Standard);

        let a = reference.check("5105105105105100").unwrap();
        let b = standard.check("5105105105105100").unwrap();
        assert!(!a.is_valid());
        assert!(b.is_valid());
        assert_eq!(a.network(), b.network());
        assert_eq!(standard.luhn_mode(), LuhnMode::Standard);
    }

    #[test]
    fn test_custom_table() {
        let table = RuleTable::from_specs([("70_79", "Private Label")], MatchOrder::Declared).unwrap();
        let classifier = CardClassifier::new(Arc::new(table));
        let result = classifier.check("7000 0000").unwrap();
        assert_eq!(result.network(), Some("Private Label"));
        assert_eq!(classifier.classify("4000000000000002"), Some("Visa"));
        assert_eq!(classifier.table().len(), 1);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("4532015112830366"));
        assert!(!is_valid("4532015112830367"));
        assert!(!is_valid("123"));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardClassifier>();
        assert_send_sync::<ValidationResult>();
        assert_send_sync::<RuleTable>();
    }
}

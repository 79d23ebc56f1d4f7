//! # cardchecker
//!
//! Payment card number checking: Luhn checksum and issuing network
//! classification from a table of prefix rules.
//!
//! ## Features
//!
//! - Normalization of human-formatted input (spaces and hyphens)
//! - Structural validation (8 to 19 ASCII digits)
//! - Luhn checksum, in reference or standard comparison mode
//! - Network classification over 60 overlapping prefix and range rules
//! - Deterministic rule ordering (most specific first by default)
//! - Rule tables loaded from JSON
//! - Multiple interfaces: library, CLI, REST API
//!
//! ## Quick Start
//!
//! ```rust
//! use cardchecker::check_card_number;
//!
//! let result = check_card_number("4532-0151-1283-0366").unwrap();
//! assert_eq!(result.normalized_number(), "4532015112830366");
//! assert!(result.is_valid());
//! assert_eq!(result.network(), Some("Visa"));
//!
//! // A failed checksum is not an error: the number is still classified
//! let result = check_card_number("4532015112830367").unwrap();
//! assert!(!result.is_valid());
//! assert_eq!(result.network(), Some("Visa"));
//!
//! // Malformed numbers are
//! assert!(check_card_number("12AB5678").is_err());
//! ```
//!
//! ## Custom Tables
//!
//! ```rust
//! use std::sync::Arc;
//! use cardchecker::{CardClassifier, LuhnMode, MatchOrder, RuleTable};
//!
//! let table = RuleTable::from_specs(
//!     [("62", "China UnionPay"), ("622126_622925", "Discover Card")],
//!     MatchOrder::MostSpecific,
//! )
//! .unwrap();
//!
//! let classifier = CardClassifier::new(Arc::new(table)).with_luhn_mode(LuhnMode::Standard);
//! let result = classifier.check("6221 2600 0000 0000").unwrap();
//! assert_eq!(result.network(), Some("Discover Card"));
//! ```
//!
//! ## Rule Ordering
//!
//! Several rules can match the same number (`60` and `6011`, `62` and
//! `622126_622925`). With [`MatchOrder::MostSpecific`] (the default) longer
//! prefixes are tried first and rules of equal width keep their declaration
//! order. [`MatchOrder::Declared`] tries rules exactly as listed. Numbers that
//! match no rule but start with `4` are Visa.
//!
//! ## Luhn Comparison
//!
//! [`LuhnMode::Reference`] (the default) compares the check digit with
//! `10 - sum % 10` as is, so numbers whose weighted sum is a multiple of ten
//! never pass. [`LuhnMode::Standard`] reduces that value modulo 10.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for results |
//! | `rules-json` | JSON rule table loader |
//! | `parallel` | Rayon-based batch checking |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod classifier;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod network;
pub mod normalize;
pub mod rules;
pub mod structure;

#[cfg(feature = "rules-json")]
pub mod rules_json;

#[cfg(any(feature = "cli", feature = "server"))]
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export main types at crate root
pub use batch::BatchSummary;
pub use classifier::{check_card_number, is_valid, CardClassifier, ValidationResult};
pub use error::{FormatIssue, RuleError, ValidationError};
pub use luhn::LuhnMode;
pub use network::{MatchOrder, NetworkRule, PrefixSpec, RuleTable};
pub use normalize::{normalize, CardNumberInput};
pub use structure::{check_structure, MAX_CARD_DIGITS, MIN_CARD_DIGITS};

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors from the service's acceptance checks
    const VISA: &str = "4532015112830366";
    const VISA_BAD_CHECKSUM: &str = "4532015112830367";
    const DISCOVER: &str = "6011514433546201";

    #[test]
    fn test_visa() {
        let result = check_card_number(VISA).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.network(), Some("Visa"));
    }

    #[test]
    fn test_discover() {
        let result = check_card_number(DISCOVER).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.network(), Some("Discover Card"));
    }

    #[test]
    fn test_bad_checksum() {
        let result = check_card_number(VISA_BAD_CHECKSUM).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.network(), Some("Visa"));
    }

    #[test]
    fn test_formatted_input() {
        for input in [" 4532-0151-1283-0366", "4532 0151 1283 0366", "4532-0151 1283-0366"] {
            assert_eq!(
                check_card_number(input).unwrap(),
                check_card_number(VISA).unwrap()
            );
        }
    }

    #[test]
    fn test_invalid_format() {
        for input in ["123", "12AB5678", "", "4532.0151.1283.0366", "45320151128303661234"] {
            let err = check_card_number(input).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidFormat(_)), "{:?}", input);
        }
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardClassifier>();
        assert_send_sync::<RuleTable>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<ValidationResult>();
    }
}

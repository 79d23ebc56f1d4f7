//! Structural validation of normalized card numbers.
//!
//! This gate runs before the checksum and the network lookup. Anything that
//! fails it is reported as [`ValidationError::InvalidFormat`] and is not
//! processed further.

use crate::error::{FormatIssue, ValidationError};

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 8;

/// Maximum number of digits in a card number (ISO/IEC 7812).
pub const MAX_CARD_DIGITS: usize = 19;

/// Checks that a normalized card number is 8 to 19 ASCII digits.
///
/// The first problem found is reported: an empty string, then the first
/// non-digit character, then the length.
///
/// # Example
///
/// ```
/// use cardchecker::structure::check_structure;
///
/// assert!(check_structure("4532015112830366").is_ok());
/// assert!(check_structure("123").is_err());
/// assert!(check_structure("12AB5678").is_err());
/// ```
pub fn check_structure(normalized: &str) -> Result<(), ValidationError> {
    if normalized.is_empty() {
        return Err(FormatIssue::Empty.into());
    }

    if let Some((position, character)) = normalized
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(FormatIssue::InvalidCharacter {
            position,
            character,
        }
        .into());
    }

    // Every character is ASCII here, so byte length is the digit count.
    let length = normalized.len();
    if length < MIN_CARD_DIGITS {
        return Err(FormatIssue::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        }
        .into());
    }
    if length > MAX_CARD_DIGITS {
        return Err(FormatIssue::TooLong {
            length,
            maximum: MAX_CARD_DIGITS,
        }
        .into());
    }

    Ok(())
}

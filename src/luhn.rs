//! Luhn checksum.
//!
//! The weighted sum runs over every digit except the last (the check digit):
//! digits at an even distance from the check digit are doubled, with 9
//! subtracted when the doubled value exceeds 9.
//!
//! Two comparison rules are supported, see [`LuhnMode`]. The default,
//! [`LuhnMode::Reference`], compares the check digit against `10 - sum % 10`
//! without reducing it modulo 10, so a number whose weighted sum is a
//! multiple of ten never passes. [`LuhnMode::Standard`] is the textbook
//! modular form.

use crate::error::{FormatIssue, ValidationError};

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// How the check digit is compared against the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LuhnMode {
    /// `check_digit == 10 - sum % 10`. Numbers whose sum is a multiple of
    /// ten are rejected, whatever their check digit.
    #[default]
    Reference,
    /// `check_digit == (10 - sum % 10) % 10`.
    Standard,
}

impl LuhnMode {
    /// Lowercase name used in configuration and CLI output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Standard => "standard",
        }
    }
}

/// Computes the weighted sum of the digits that precede the check digit.
///
/// `payload` is the card number without its last digit. Positions are
/// weighted relative to the full number: with `parity = payload.len() % 2`,
/// index `i` is added unchanged when `i % 2 == parity` and doubled otherwise,
/// so the rightmost payload digit is always doubled.
#[inline]
pub fn payload_sum(payload: &[u8]) -> u32 {
    let parity = payload.len() % 2;
    let mut sum: u32 = 0;

    for (i, &digit) in payload.iter().enumerate().rev() {
        if i % 2 == parity {
            sum += digit as u32;
        } else {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        }
    }

    sum
}

/// Returns the check digit that completes `payload` under `mode`.
///
/// In [`LuhnMode::Reference`] the required value is 10 whenever the payload
/// sum is a multiple of ten, which no digit satisfies; `None` is returned.
///
/// # Example
///
/// ```
/// use cardchecker::luhn::{check_digit_for, LuhnMode};
///
/// let payload = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
/// assert_eq!(check_digit_for(&payload, LuhnMode::Reference), Some(6));
///
/// let payload = [5, 1, 0, 5, 1, 0, 5, 1, 0, 5, 1, 0, 5, 1, 0];
/// assert_eq!(check_digit_for(&payload, LuhnMode::Reference), None);
/// assert_eq!(check_digit_for(&payload, LuhnMode::Standard), Some(0));
/// ```
#[inline]
pub fn check_digit_for(payload: &[u8], mode: LuhnMode) -> Option<u8> {
    let required = 10 - (payload_sum(payload) % 10);
    match mode {
        LuhnMode::Reference if required == 10 => None,
        LuhnMode::Reference => Some(required as u8),
        LuhnMode::Standard => Some((required % 10) as u8),
    }
}

/// Validates a sequence of digit values (0-9).
///
/// Fewer than two digits never validate.
///
/// # Example
///
/// ```
/// use cardchecker::luhn::{validate, LuhnMode};
///
/// let digits = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 6];
/// assert!(validate(&digits, LuhnMode::Reference));
///
/// let invalid = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6, 7];
/// assert!(!validate(&invalid, LuhnMode::Reference));
/// ```
#[inline]
pub fn validate(digits: &[u8], mode: LuhnMode) -> bool {
    match digits.split_last() {
        Some((&check, payload)) if !payload.is_empty() => {
            check_digit_for(payload, mode) == Some(check)
        }
        _ => false,
    }
}

/// Checks a normalized numeric string.
///
/// Returns `InvalidFormat` for strings shorter than two characters or
/// containing anything other than ASCII digits.
///
/// # Example
///
/// ```
/// use cardchecker::luhn::{check, LuhnMode};
///
/// assert_eq!(check("4532015112830366", LuhnMode::Reference), Ok(true));
/// assert_eq!(check("4532015112830367", LuhnMode::Reference), Ok(false));
/// assert!(check("7", LuhnMode::Reference).is_err());
/// ```
pub fn check(number: &str, mode: LuhnMode) -> Result<bool, ValidationError> {
    let digits = to_digits(number)?;
    if digits.len() < 2 {
        return Err(FormatIssue::TooShort {
            length: digits.len(),
            minimum: 2,
        }
        .into());
    }
    Ok(validate(&digits, mode))
}

fn to_digits(number: &str) -> Result<Vec<u8>, ValidationError> {
    number
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0'..='9' => Ok(character as u8 - b'0'),
            _ => Err(FormatIssue::InvalidCharacter {
                position,
                character,
            }
            .into()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_valid_numbers() {
        for card in [
            "4532015112830366",
            "6011514433546201",
            "4111111111111111",
            "378282246310005",
            "5500000000000004",
            "79927398713",
        ] {
            assert!(
                validate(&digits(card), LuhnMode::Reference),
                "{} should pass",
                card
            );
            assert!(validate(&digits(card), LuhnMode::Standard));
        }
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!validate(&digits("4532015112830367"), LuhnMode::Reference));
        assert!(!validate(&digits("4111111111111112"), LuhnMode::Standard));
        assert!(!validate(&digits("1234567890123456"), LuhnMode::Standard));
    }

    #[test]
    fn test_reference_rejects_zero_remainder() {
        // Weighted sum is a multiple of ten, so the required digit is 10
        for card in ["5105105105105100", "3530111333300000", "6304000000000000"] {
            assert!(!validate(&digits(card), LuhnMode::Reference), "{}", card);
            assert!(validate(&digits(card), LuhnMode::Standard), "{}", card);
        }
    }

    #[test]
    fn test_payload_sum() {
        // 7 9 9 2 7 3 9 8 7 1 | 3
        assert_eq!(payload_sum(&digits("7992739871")), 67);
        assert_eq!(payload_sum(&[]), 0);
        // Single payload digit is doubled
        assert_eq!(payload_sum(&[7]), 5);
    }

    #[test]
    fn test_check_digit_for() {
        assert_eq!(
            check_digit_for(&digits("7992739871"), LuhnMode::Reference),
            Some(3)
        );
        assert_eq!(
            check_digit_for(&digits("601151443354620"), LuhnMode::Standard),
            Some(1)
        );
        assert_eq!(
            check_digit_for(&digits("510510510510510"), LuhnMode::Reference),
            None
        );
    }

    #[test]
    fn test_short_input() {
        assert!(!validate(&[], LuhnMode::Reference));
        assert!(!validate(&[0], LuhnMode::Standard));
        assert!(check("", LuhnMode::Reference).is_err());
        assert!(check("5", LuhnMode::Reference).is_err());
        // Two digits is the smallest checkable input: 1 doubled is 2, 10 - 2 = 8
        assert_eq!(check("18", LuhnMode::Reference), Ok(true));
    }

    #[test]
    fn test_check_rejects_non_digits() {
        let err = check("45x2", LuhnMode::Reference).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat(FormatIssue::InvalidCharacter {
                position: 2,
                character: 'x'
            })
        );
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }

    #[test]
    fn test_mode_default_and_name() {
        assert_eq!(LuhnMode::default(), LuhnMode::Reference);
        assert_eq!(LuhnMode::Standard.name(), "standard");
    }
}

//! Masking card numbers for log lines and CLI output.
//!
//! Only the last four digits are ever shown. Raw input is masked from its
//! digits alone, so malformed input ("12AB5678") is masked the same way.

use crate::classifier::ValidationResult;

/// Masks a card number string, keeping only the last 4 digits.
///
/// Non-digit characters are dropped first. Masked digits are grouped in
/// fours and set off from the visible digits: `****-****-****-0366`,
/// `****-****-***-0005`.
///
/// # Example
///
/// ```
/// use cardchecker::mask::mask_string;
///
/// assert_eq!(mask_string("4532-0151-1283-0366"), "****-****-****-0366");
/// assert_eq!(mask_string("123"), "***");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let hidden = len - 4;
    let mut result = String::with_capacity(len + len / 4);
    for i in 0..hidden {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }
    result.push('-');
    result.extend(&digits[hidden..]);
    result
}

/// Masks the normalized number of a checked result.
#[inline]
pub fn mask_result(result: &ValidationResult) -> String {
    mask_string(result.normalized_number())
}

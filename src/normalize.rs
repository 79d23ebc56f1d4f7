//! Input normalization.
//!
//! Card numbers arrive formatted for humans ("4532 0151 1283 0366",
//! "4532-0151-1283-0366"). Normalization removes spaces and hyphens and
//! leaves every other character untouched, so that structural validation
//! can reject anything that is not a digit.

/// Returns `true` for the separators removed during normalization.
#[inline]
pub const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-')
}

/// Removes all spaces and hyphens from a raw card number.
///
/// No other characters are altered, and the function is idempotent.
///
/// # Example
///
/// ```
/// use cardchecker::normalize::normalize;
///
/// assert_eq!(normalize(" 4532-0151-1283-0366"), "4532015112830366");
/// assert_eq!(normalize("12AB 5678"), "12AB5678");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|&c| !is_separator(c)).collect()
}

/// A card number as received, paired with its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumberInput<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> CardNumberInput<'a> {
    /// Normalizes `raw` and keeps both forms.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: normalize(raw),
        }
    }

    /// The input exactly as received.
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The input with separators removed.
    #[inline]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Consumes the input, returning the normalized string.
    #[inline]
    pub fn into_normalized(self) -> String {
        self.normalized
    }
}

//! Error types for card number checking and rule table construction.
//!
//! A structurally valid number that fails the Luhn checksum is not an error:
//! it is a successful check with `valid == false`. Errors are reserved for
//! input that cannot be checked at all, and for malformed prefix rules.

use std::fmt;

/// Why a normalized card number was rejected before checksum and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    /// Nothing was left after stripping separators.
    Empty,

    /// A character other than an ASCII digit was found.
    InvalidCharacter {
        /// Position in the normalized string (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// Fewer digits than the shortest accepted card number.
    TooShort {
        /// Number of digits provided.
        length: usize,
        /// Minimum accepted (8).
        minimum: usize,
    },

    /// More digits than the longest accepted card number.
    TooLong {
        /// Number of digits provided.
        length: usize,
        /// Maximum accepted (19).
        maximum: usize,
    },
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits, spaces, and hyphens allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }
        }
    }
}

/// Errors that can occur while checking a card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The normalized number failed the length or digit-only checks.
    InvalidFormat(FormatIssue),
}

impl ValidationError {
    /// Returns the structural problem behind this error.
    pub fn issue(&self) -> &FormatIssue {
        match self {
            Self::InvalidFormat(issue) => issue,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(issue) => write!(f, "invalid card number: {}", issue),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<FormatIssue> for ValidationError {
    fn from(issue: FormatIssue) -> Self {
        Self::InvalidFormat(issue)
    }
}

/// Errors raised while building a network rule table.
#[derive(Debug)]
pub enum RuleError {
    /// A prefix spec could not be parsed.
    InvalidSpec {
        /// The spec as written.
        spec: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A rule had an empty network name.
    EmptyNetwork {
        /// The spec the empty name was attached to.
        spec: String,
    },

    /// Reading a rule file failed.
    Io(std::io::Error),

    /// A rule file was not valid JSON of the expected shape.
    #[cfg(feature = "rules-json")]
    Json(serde_json::Error),
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpec { spec, reason } => {
                write!(f, "invalid prefix spec '{}': {}", spec, reason)
            }
            Self::EmptyNetwork { spec } => {
                write!(f, "rule '{}' has an empty network name", spec)
            }
            Self::Io(e) => write!(f, "failed to read rule file: {}", e),
            #[cfg(feature = "rules-json")]
            Self::Json(e) => write!(f, "failed to parse rule file: {}", e),
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "rules-json")]
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RuleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "rules-json")]
impl From<serde_json::Error> for RuleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FormatIssue::Empty.to_string(), "card number is empty");

        assert_eq!(
            FormatIssue::TooShort {
                length: 3,
                minimum: 8
            }
            .to_string(),
            "card number too short: got 3 digits, minimum is 8"
        );

        assert_eq!(
            ValidationError::InvalidFormat(FormatIssue::InvalidCharacter {
                position: 2,
                character: 'A'
            })
            .to_string(),
            "invalid card number: invalid character 'A' at position 2 (only digits, spaces, and hyphens allowed)"
        );
    }

    #[test]
    fn test_issue_accessor() {
        let err: ValidationError = FormatIssue::TooLong {
            length: 20,
            maximum: 19,
        }
        .into();
        assert!(matches!(err.issue(), FormatIssue::TooLong { length: 20, .. }));
    }

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::InvalidSpec {
            spec: "9_1".to_string(),
            reason: "lower bound exceeds upper bound",
        };
        assert_eq!(
            err.to_string(),
            "invalid prefix spec '9_1': lower bound exceeds upper bound"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
        assert_send_sync::<RuleError>();
    }
}

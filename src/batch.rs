//! Checking many card numbers at once.
//!
//! A [`CardClassifier`] holds no mutable state, so batches can be split
//! across threads freely. With the `parallel` feature the rayon-backed
//! variants do exactly that.

use crate::classifier::{CardClassifier, ValidationResult};
use crate::error::ValidationError;

/// Counts from a batch check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Numbers processed.
    pub total: usize,
    /// Well-formed numbers that passed the checksum.
    pub valid: usize,
    /// Well-formed numbers that failed the checksum.
    pub invalid: usize,
    /// Numbers rejected as `InvalidFormat`.
    pub malformed: usize,
}

impl BatchSummary {
    /// Tallies a slice of results.
    pub fn from_results(results: &[Result<ValidationResult, ValidationError>]) -> Self {
        results.iter().fold(
            Self {
                total: results.len(),
                ..Self::default()
            },
            |mut summary, result| {
                match result {
                    Ok(r) if r.is_valid() => summary.valid += 1,
                    Ok(_) => summary.invalid += 1,
                    Err(_) => summary.malformed += 1,
                }
                summary
            },
        )
    }
}

impl CardClassifier {
    /// Checks each number, returning results in input order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardchecker::CardClassifier;
    ///
    /// let classifier = CardClassifier::default();
    /// let results = classifier.check_all(&["4532015112830366", "4532015112830367", "123"]);
    ///
    /// assert!(results[0].as_ref().unwrap().is_valid());
    /// assert!(!results[1].as_ref().unwrap().is_valid());
    /// assert!(results[2].is_err());
    /// ```
    pub fn check_all<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> Vec<Result<ValidationResult, ValidationError>> {
        cards.iter().map(|c| self.check(c.as_ref())).collect()
    }

    /// Splits a batch into well-formed results and indexed errors.
    pub fn check_partitioned<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> (Vec<ValidationResult>, Vec<(usize, ValidationError)>) {
        let mut checked = Vec::new();
        let mut rejected = Vec::new();

        for (i, card) in cards.iter().enumerate() {
            match self.check(card.as_ref()) {
                Ok(result) => checked.push(result),
                Err(e) => rejected.push((i, e)),
            }
        }

        (checked, rejected)
    }

    /// Checks each number in parallel, returning results in input order.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn check_all_parallel<S: AsRef<str> + Sync>(
        &self,
        cards: &[S],
    ) -> Vec<Result<ValidationResult, ValidationError>> {
        use rayon::prelude::*;
        cards.par_iter().map(|c| self.check(c.as_ref())).collect()
    }
}

/// Counts valid, checksum-failing and malformed numbers without keeping
/// the results.
///
/// # Example
///
/// ```
/// use cardchecker::batch::count_valid;
///
/// let summary = count_valid(&["4532015112830366", "4532015112830367", "bad"]);
/// assert_eq!((summary.valid, summary.invalid, summary.malformed), (1, 1, 1));
/// ```
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> BatchSummary {
    let classifier = CardClassifier::default();
    let mut summary = BatchSummary {
        total: cards.len(),
        ..BatchSummary::default()
    };

    for card in cards {
        match classifier.check(card.as_ref()) {
            Ok(r) if r.is_valid() => summary.valid += 1,
            Ok(_) => summary.invalid += 1,
            Err(_) => summary.malformed += 1,
        }
    }

    summary
}

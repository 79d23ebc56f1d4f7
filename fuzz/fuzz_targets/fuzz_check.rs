//! Fuzz target for card checking.
//!
//! Tests that checking never panics on arbitrary input and that the
//! result agrees with structural validation.

#![no_main]

use cardchecker::{check_card_number, check_structure, is_valid, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let result = check_card_number(data);
    let _ = is_valid(data);

    let normalized = normalize(data);
    assert_eq!(result.is_ok(), check_structure(&normalized).is_ok());

    if let Ok(result) = result {
        assert_eq!(result.normalized_number(), normalized);
        if normalized.starts_with('4') {
            assert!(result.network().is_some(), "4-prefixed numbers are always classified");
        }
    }
});

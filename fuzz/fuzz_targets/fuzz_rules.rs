//! Fuzz target for prefix rule parsing and matching.

#![no_main]

use cardchecker::PrefixSpec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (spec, number) = input;
    if let Ok(parsed) = PrefixSpec::parse(spec) {
        let _ = parsed.matches(number);
        // Display output parses back to the same spec
        let reparsed = PrefixSpec::parse(&parsed.to_string()).expect("display output parses");
        assert_eq!(reparsed, parsed);
    }
});

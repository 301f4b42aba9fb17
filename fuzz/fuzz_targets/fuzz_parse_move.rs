#![no_main]

//! Move notation fuzzer.
//!
//! Any string either fails to parse or parses into a move whose notation
//! parses back to the same move.

use libfuzzer_sys::fuzz_target;
use quoridor::parse_move;

fuzz_target!(|text: &str| {
    if let Ok(mv) = parse_move(text) {
        let again = parse_move(&mv.to_string());
        assert_eq!(again, Ok(mv), "notation for {text:?} did not parse back");
    }
});

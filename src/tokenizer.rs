// src/tokenizer.rs
//! Headline tokenizer: ordered, lowercased word tokens.
//!
//! A token is a run of letters/digits. Runs joined by a single `-`, `'`, `’`
//! or `.` stay together, so `how-to`, `don't`, `u.s` and `3.5` are one token
//! each. Anything else separates tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’.\-][\p{L}\p{N}]+)*").expect("tokenizer regex")
});

/// Split `input` into lowercase word tokens, preserving source order.
/// Empty or whitespace-only input yields an empty vector.
pub fn tokenize(input: &str) -> Vec<String> {
    WORD_RE
        .find_iter(input)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// True if the token is a plain number (integer or decimal).
///
/// Only ASCII digits and `.` are accepted before parsing, so `nan`, `inf`,
/// `10x` and `1.2.3` are all rejected.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.parse::<f64>().is_ok()
}

// src/readability.rs
//! Readability metrics for a single headline.
//!
//! - Flesch-Kincaid grade: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//! - Flesch reading ease:  `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Values are NOT clamped here; a four-word headline easily lands below grade 0
//! or above ease 100. Words are tokenizer tokens, so counts agree with the
//! structural analysis.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tokenizer::tokenize;

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s|$)").expect("sentence end regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityResult {
    pub flesch_kincaid_grade: f64,
    pub flesch_reading_ease: f64,
    #[serde(skip)]
    pub sentence_count: usize,
    #[serde(skip)]
    pub word_count: usize,
    #[serde(skip)]
    pub syllable_count: usize,
}

pub fn analyze_readability(text: &str) -> ReadabilityResult {
    let tokens = tokenize(text);
    let words = tokens.len();
    let sentences = count_sentences(text);
    let syllables: usize = tokens.iter().map(|t| count_syllables(t)).sum();

    // Zero words: both ratios are 0 so no NaN/inf reaches the JSON encoder.
    let (words_per_sentence, syllables_per_word) = if words == 0 {
        (0.0, 0.0)
    } else {
        (
            words as f64 / sentences as f64,
            syllables as f64 / words as f64,
        )
    };

    ReadabilityResult {
        flesch_kincaid_grade: 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
        flesch_reading_ease: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        sentence_count: sentences,
        word_count: words,
        syllable_count: syllables,
    }
}

/// Runs of `.`/`!`/`?` followed by whitespace or end of text; at least 1.
/// `3.5` and `u.s` are not sentence breaks.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END_RE.find_iter(text).count().max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-group syllable heuristic with silent-`e` handling.
///
/// Tokens without letters (numbers) count as one spoken word.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    let n = chars.len();
    if n <= 3 {
        return 1;
    }

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for (i, &c) in chars.iter().enumerate() {
        // leading "y" is a consonant (yellow, young)
        let v = is_vowel(c) && !(i == 0 && c == 'y');
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }

    if groups > 1 && silent_final_e(&chars) {
        groups -= 1;
    }
    groups.max(1)
}

fn silent_final_e(chars: &[char]) -> bool {
    let n = chars.len();
    let last = chars[n - 1];
    let before = chars[n - 2];
    let before2 = chars[n - 3];

    match (before, last) {
        // bake, stone; but not table, agree
        (b, 'e') => !is_vowel(b) && !(b == 'l' && !is_vowel(before2)),
        // baked, hoped; but not wanted, faded
        ('e', 'd') => !is_vowel(before2) && !matches!(before2, 't' | 'd'),
        // bakes, hopes; but not boxes, roses, matches
        ('e', 's') => {
            !is_vowel(before2) && !matches!(before2, 's' | 'x' | 'z' | 'c' | 'g' | 'h')
        }
        _ => false,
    }
}

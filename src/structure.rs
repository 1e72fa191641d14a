// src/structure.rs
//! Structural analysis: counts, positional word slices and headline type tags.
//!
//! Type detection is a fixed, ordered table of `(HeadlineType, predicate)`
//! rules. Every matching rule contributes its tag; `General` is emitted only
//! when nothing else matched.

use serde::{Deserialize, Serialize};

use crate::tokenizer::is_numeric;

/// How many tokens `beginning_words` / `ending_words` keep.
pub const EDGE_WORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadlineType {
    #[serde(rename = "How-to")]
    HowTo,
    #[serde(rename = "List")]
    List,
    #[serde(rename = "Question-based")]
    Question,
    #[serde(rename = "Reviews/Comparison")]
    Review,
    #[serde(rename = "Case Study")]
    CaseStudy,
    #[serde(rename = "Interview")]
    Interview,
    #[serde(rename = "General")]
    General,
}

impl HeadlineType {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadlineType::HowTo => "How-to",
            HeadlineType::List => "List",
            HeadlineType::Question => "Question-based",
            HeadlineType::Review => "Reviews/Comparison",
            HeadlineType::CaseStudy => "Case Study",
            HeadlineType::Interview => "Interview",
            HeadlineType::General => "General",
        }
    }
}

impl std::fmt::Display for HeadlineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type Predicate = fn(&str, &[String]) -> bool;

/// Evaluation order is also output order.
const TYPE_RULES: [(HeadlineType, Predicate); 6] = [
    (HeadlineType::HowTo, is_how_to),
    (HeadlineType::List, is_list),
    (HeadlineType::Question, is_question),
    (HeadlineType::Review, is_review),
    (HeadlineType::CaseStudy, is_case_study),
    (HeadlineType::Interview, is_interview),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralAnalysis {
    pub headline_type: Vec<HeadlineType>,
    pub character_count: usize,
    pub word_count: usize,
    pub beginning_words: Vec<String>,
    pub ending_words: Vec<String>,
}

/// Build the structural view of `headline` from its tokens.
///
/// `character_count` counts UTF-16 code units of the untrimmed headline, so an
/// emoji outside the BMP counts 2 (the length a browser reports).
pub fn analyze_structure(headline: &str, tokens: &[String]) -> StructuralAnalysis {
    let word_count = tokens.len();
    let head = word_count.min(EDGE_WORDS);
    let tail_start = word_count.saturating_sub(EDGE_WORDS);

    StructuralAnalysis {
        headline_type: classify(headline, tokens),
        character_count: headline.encode_utf16().count(),
        word_count,
        beginning_words: tokens[..head].to_vec(),
        ending_words: tokens[tail_start..].to_vec(),
    }
}

/// All matching type tags in rule order, or `[General]`.
pub fn classify(headline: &str, tokens: &[String]) -> Vec<HeadlineType> {
    let tags: Vec<HeadlineType> = TYPE_RULES
        .iter()
        .filter(|(_, pred)| pred(headline, tokens))
        .map(|(tag, _)| *tag)
        .collect();

    if tags.is_empty() {
        vec![HeadlineType::General]
    } else {
        tags
    }
}

// --- predicates ---

fn token_at(tokens: &[String], i: usize) -> Option<&str> {
    tokens.get(i).map(String::as_str)
}

fn contains_any(tokens: &[String], words: &[&str]) -> bool {
    tokens.iter().any(|t| words.contains(&t.as_str()))
}

fn is_how_to(_: &str, tokens: &[String]) -> bool {
    match (token_at(tokens, 0), token_at(tokens, 1)) {
        (Some("how-to"), _) => true,
        (Some("how"), Some("to")) => true,
        _ => false,
    }
}

fn is_list(_: &str, tokens: &[String]) -> bool {
    match (token_at(tokens, 0), token_at(tokens, 1)) {
        (Some(first), _) if is_numeric(first) => true,
        (Some("best" | "top"), Some(second)) => is_numeric(second),
        _ => false,
    }
}

fn is_question(headline: &str, tokens: &[String]) -> bool {
    contains_any(tokens, &["why", "what", "when"]) || headline.contains('?')
}

fn is_review(_: &str, tokens: &[String]) -> bool {
    contains_any(tokens, &["review", "vs", "which"])
}

fn is_case_study(_: &str, tokens: &[String]) -> bool {
    contains_any(tokens, &["case"]) && contains_any(tokens, &["study"])
}

fn is_interview(_: &str, tokens: &[String]) -> bool {
    contains_any(tokens, &["interview"])
}

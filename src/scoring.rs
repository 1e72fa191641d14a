// src/scoring.rs
//! Composite headline score.
//!
//! Nine factors, each mapped to a (nominal) 0..100 value, combined with fixed
//! weights that sum to 1.0:
//!
//! | factor           | weight | value                                        |
//! |------------------|--------|----------------------------------------------|
//! | headline length  | 0.40   | `min(100, chars / 60 * 100)`                 |
//! | number present   | 0.10   | 100 if the headline has a digit, else 0      |
//! | common words     | 0.05   | `min(100, common / words * 100)`             |
//! | uncommon words   | 0.05   | `min(100, uncommon / words * 100)`           |
//! | emotional words  | 0.10   | `min(100, emotional / words * 100)`          |
//! | power words      | 0.10   | 100 if any power word, else 0                |
//! | sentiment        | 0.10   | raw sentiment score, unnormalized            |
//! | grade level      | 0.05   | `(9 - grade) / 9 * 100`, unclamped           |
//! | reading ease     | 0.05   | `min(100, (ease - 60) / 10 * 100)`           |
//!
//! Only the factors marked `min(100, ..)` are capped, and the total is not
//! clamped: strongly positive or very easy headlines can score above 100,
//! hard or negative ones below 0.

use serde::Serialize;

use crate::lexicon::WordBalance;
use crate::readability::ReadabilityResult;
use crate::sentiment::SentimentResult;
use crate::structure::StructuralAnalysis;

pub const OPTIMAL_CHARACTERS: f64 = 60.0;
pub const OPTIMAL_GRADE: f64 = 9.0;
pub const READING_EASE_FLOOR: f64 = 60.0;
pub const READING_EASE_BAND: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    HeadlineLength,
    NumberPresent,
    CommonWords,
    UncommonWords,
    EmotionalWords,
    PowerWords,
    Sentiment,
    GradeLevel,
    ReadingEase,
}

pub const FACTOR_WEIGHTS: [(Factor, f64); 9] = [
    (Factor::HeadlineLength, 0.40),
    (Factor::NumberPresent, 0.10),
    (Factor::CommonWords, 0.05),
    (Factor::UncommonWords, 0.05),
    (Factor::EmotionalWords, 0.10),
    (Factor::PowerWords, 0.10),
    (Factor::Sentiment, 0.10),
    (Factor::GradeLevel, 0.05),
    (Factor::ReadingEase, 0.05),
];

/// Everything the aggregator reads, borrowed from the pipeline stages.
#[derive(Clone, Copy, Debug)]
pub struct ScoreInputs<'a> {
    pub headline: &'a str,
    pub structure: &'a StructuralAnalysis,
    pub word_balance: &'a WordBalance,
    pub sentiment: &'a SentimentResult,
    pub readability: &'a ReadabilityResult,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub weight: f64,
    pub value: f64,
}

impl FactorScore {
    pub fn contribution(&self) -> f64 {
        self.weight * self.value
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorScore>,
    pub total: f64,
}

/// Per-factor values and the weighted total, in table order.
pub fn score_breakdown(inputs: &ScoreInputs) -> ScoreBreakdown {
    let factors: Vec<FactorScore> = FACTOR_WEIGHTS
        .iter()
        .map(|&(factor, weight)| FactorScore {
            factor,
            weight,
            value: factor_value(factor, inputs),
        })
        .collect();
    let total = factors.iter().map(FactorScore::contribution).sum();
    ScoreBreakdown { factors, total }
}

pub fn composite_score(inputs: &ScoreInputs) -> f64 {
    score_breakdown(inputs).total
}

fn factor_value(factor: Factor, i: &ScoreInputs) -> f64 {
    let words = i.structure.word_count;
    match factor {
        Factor::HeadlineLength => {
            (i.structure.character_count as f64 / OPTIMAL_CHARACTERS * 100.0).min(100.0)
        }
        Factor::NumberPresent => flag(i.headline.chars().any(|c| c.is_ascii_digit())),
        Factor::CommonWords => ratio(i.word_balance.common_words.len(), words),
        Factor::UncommonWords => ratio(i.word_balance.uncommon_words.len(), words),
        Factor::EmotionalWords => ratio(i.word_balance.emotional_words.len(), words),
        Factor::PowerWords => flag(!i.word_balance.power_words.is_empty()),
        Factor::Sentiment => i.sentiment.score as f64,
        Factor::GradeLevel => {
            (OPTIMAL_GRADE - i.readability.flesch_kincaid_grade) / OPTIMAL_GRADE * 100.0
        }
        Factor::ReadingEase => ((i.readability.flesch_reading_ease - READING_EASE_FLOOR)
            / READING_EASE_BAND
            * 100.0)
            .min(100.0),
    }
}

fn flag(on: bool) -> f64 {
    if on {
        100.0
    } else {
        0.0
    }
}

/// Percentage of `words` that `count` represents, capped at 100; 0 for no words.
fn ratio(count: usize, words: usize) -> f64 {
    if words == 0 {
        return 0.0;
    }
    (count as f64 / words as f64 * 100.0).min(100.0)
}

// src/sentiment.rs
//! Lexicon-sum sentiment: every token adds its polarity weight to the score.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicons;
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: i32,
    /// `score / token_count`, 0.0 for token-less text.
    pub comparative: f64,
    pub label: SentimentLabel,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => SentimentLabel::Positive,
            -1 => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    lexicons: &'a Lexicons,
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(lexicons: &'a Lexicons) -> Self {
        Self { lexicons }
    }

    /// Score raw text. Tokenizes on its own, so it does not depend on the
    /// pipeline's token list.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let mut score: i32 = 0;
        let mut positive_words = Vec::new();
        let mut negative_words = Vec::new();

        for tok in tokens.iter() {
            let w = self.lexicons.polarity_of(tok);
            if w > 0 {
                positive_words.push(tok.clone());
            } else if w < 0 {
                negative_words.push(tok.clone());
            }
            score += w;
        }

        let comparative = if tokens.is_empty() {
            0.0
        } else {
            score as f64 / tokens.len() as f64
        };

        SentimentResult {
            score,
            comparative,
            label: SentimentLabel::from_score(score),
            positive_words,
            negative_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> SentimentResult {
        SentimentAnalyzer::new(Lexicons::embedded()).analyze(text)
    }

    #[test]
    fn sums_weights_and_attributes_words() {
        let lex = Lexicons::embedded();
        let r = analyze("Great news: the awful commute is over, great!");
        let expected = 2 * lex.polarity_of("great") + lex.polarity_of("awful");
        assert_eq!(r.score, expected);
        assert_eq!(r.positive_words, vec!["great", "great"]);
        assert_eq!(r.negative_words, vec!["awful"]);
        assert_eq!(r.label, SentimentLabel::from_score(expected));
    }

    #[test]
    fn neutral_text() {
        let r = analyze("Quarterly report published on Tuesday");
        assert_eq!(r.score, 0);
        assert_eq!(r.label, SentimentLabel::Neutral);
        assert!(r.positive_words.is_empty() && r.negative_words.is_empty());
    }

    #[test]
    fn negative_text_and_comparative() {
        let r = analyze("Worst Mistake Ever");
        assert!(r.score < 0);
        assert_eq!(r.label, SentimentLabel::Negative);
        assert!((r.comparative - r.score as f64 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn inflected_news_headlines() {
        let r = analyze("Markets Lost Billions");
        assert!(r.score < 0, "score {}", r.score);
        assert_eq!(r.negative_words, vec!["lost"]);

        let r = analyze("Hope Fades As Fighting Worsens");
        assert_eq!(r.label, SentimentLabel::Negative, "score {}", r.score);
        assert_eq!(r.positive_words, vec!["hope"]);
        assert_eq!(r.negative_words, vec!["fades", "fighting", "worsens"]);

        let r = analyze("Dr. Smith Wins Award");
        assert_eq!(r.label, SentimentLabel::Positive);
        assert_eq!(r.positive_words, vec!["wins", "award"]);
    }

    #[test]
    fn empty_text_has_zero_comparative() {
        let r = analyze("...");
        assert_eq!(r.score, 0);
        assert_eq!(r.comparative, 0.0);
    }

    #[test]
    fn label_serializes_lowercase() {
        let v = serde_json::to_value(SentimentLabel::Positive).unwrap();
        assert_eq!(v, serde_json::json!("positive"));
    }
}

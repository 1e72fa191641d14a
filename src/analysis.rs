// src/analysis.rs
//! Analysis pipeline entry: validates the headline, runs every analyzer and
//! assembles the response record.
//!
//! Order:
//! 1) tokenize
//! 2) word balance + structure (token based)
//! 3) sentiment + readability (raw text based)
//! 4) composite score over all of the above

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::lexicon::{Lexicons, WordBalance};
use crate::readability::{analyze_readability, ReadabilityResult};
use crate::scoring::{score_breakdown, ScoreInputs};
use crate::sentiment::{SentimentAnalyzer, SentimentResult};
use crate::structure::{analyze_structure, StructuralAnalysis};
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Headline is required")]
    MissingHeadline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    pub word_balance: WordBalance,
}

/// Final response returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub headline: String,
    pub score: f64,
    pub tokens: Vec<String>,
    pub structural_analysis: StructuralAnalysis,
    pub semantic_analysis: SemanticAnalysis,
    pub sentiment_analysis: SentimentResult,
    pub readability_analysis: ReadabilityResult,
}

/// Analyze with the compiled-in lexicons.
pub fn analyze(headline: &str) -> Result<AnalysisResult, AnalysisError> {
    analyze_headline(headline, Lexicons::embedded())
}

/// Run the full pipeline. Fails only when `headline` is empty.
pub fn analyze_headline(
    headline: &str,
    lexicons: &Lexicons,
) -> Result<AnalysisResult, AnalysisError> {
    if headline.is_empty() {
        return Err(AnalysisError::MissingHeadline);
    }

    let tokens = tokenize(headline);
    let word_balance = lexicons.word_balance(&tokens);
    let structure = analyze_structure(headline, &tokens);
    let sentiment = SentimentAnalyzer::new(lexicons).analyze(headline);
    let readability = analyze_readability(headline);

    let breakdown = score_breakdown(&ScoreInputs {
        headline,
        structure: &structure,
        word_balance: &word_balance,
        sentiment: &sentiment,
        readability: &readability,
    });

    // Never log raw text. Only hashed id + numbers.
    debug!(
        target: "analysis",
        id = %anon_hash(headline),
        score = breakdown.total,
        words = structure.word_count,
        types = ?structure.headline_type,
        factors = ?breakdown
            .factors
            .iter()
            .map(|f| (f.factor, f.contribution()))
            .collect::<Vec<_>>(),
        "headline analyzed"
    );

    Ok(AnalysisResult {
        headline: headline.to_string(),
        score: breakdown.total,
        tokens,
        structural_analysis: structure,
        semantic_analysis: SemanticAnalysis { word_balance },
        sentiment_analysis: sentiment,
        readability_analysis: readability,
    })
}

/// Short stable id for a headline in logs (first 6 bytes of SHA-256, hex).
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::HeadlineType;

    #[test]
    fn empty_headline_is_rejected() {
        assert_eq!(analyze(""), Err(AnalysisError::MissingHeadline));
        assert_eq!(
            AnalysisError::MissingHeadline.to_string(),
            "Headline is required"
        );
    }

    #[test]
    fn how_to_scenario() {
        let r = analyze("How to Bake Bread").unwrap();
        assert_eq!(r.tokens, vec!["how", "to", "bake", "bread"]);
        assert!(r
            .structural_analysis
            .headline_type
            .contains(&HeadlineType::HowTo));
        assert_eq!(r.structural_analysis.word_count, 4);
        assert_eq!(r.structural_analysis.character_count, 17);
    }

    #[test]
    fn whitespace_only_headline_is_analyzed() {
        let r = analyze("   ").unwrap();
        assert!(r.tokens.is_empty());
        assert_eq!(r.structural_analysis.character_count, 3);
        assert_eq!(
            r.structural_analysis.headline_type,
            vec![HeadlineType::General]
        );
        assert!(r.score.is_finite());
    }

    #[test]
    fn custom_lexicons_flow_through() {
        let mut lex = Lexicons::embedded().clone();
        lex.power.insert("bread".to_string());
        lex.polarity.insert("bread".to_string(), 5);

        let base = analyze("How to Bake Bread").unwrap();
        let custom = analyze_headline("How to Bake Bread", &lex).unwrap();
        assert_eq!(custom.semantic_analysis.word_balance.power_words, vec!["bread"]);
        assert_eq!(custom.sentiment_analysis.positive_words, vec!["bread"]);
        // power flag (+10) and sentiment 5 (+0.5) on top of the base score
        assert!((custom.score - base.score - 10.5).abs() < 1e-9);
    }

    #[test]
    fn deterministic() {
        let h = "Top 7 Shocking Secrets Nobody Tells You About Money?";
        assert_eq!(analyze(h).unwrap(), analyze(h).unwrap());
    }

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("hello");
        assert_eq!(a.len(), 12);
        assert_eq!(a, anon_hash("hello"));
        assert_ne!(a, anon_hash("hello!"));
    }
}

// tests/analysis_properties.rs
//
// Invariants of the analysis record over seeded random headlines.
// The RNG is seeded so failures are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use headline_analyzer::{analyze, AnalysisError, HeadlineType};

const VOCAB: &[&str] = &[
    "how", "to", "how-to", "10", "3.5", "best", "top", "why", "what", "when", "review", "vs",
    "which", "case", "study", "interview", "amazing", "secret", "ultimate", "worst", "love",
    "bread", "the", "a", "of", "you", "money", "don't", "shocking", "simple", "zxqv",
];
const GLUE: &[&str] = &[" ", " ", " ", ", ", " - ", ": ", "! ", "? ", ". "];

fn random_headline(rng: &mut StdRng) -> String {
    let n = rng.random_range(0..12);
    let mut out = String::new();
    if rng.random_bool(0.2) {
        out.push(' ');
    }
    for i in 0..n {
        if i > 0 {
            out.push_str(GLUE[rng.random_range(0..GLUE.len())]);
        }
        let w = VOCAB[rng.random_range(0..VOCAB.len())];
        if rng.random_bool(0.3) {
            out.push_str(&w.to_uppercase());
        } else {
            out.push_str(w);
        }
    }
    if rng.random_bool(0.2) {
        out.push('?');
    }
    out
}

#[test]
fn structural_invariants_hold_for_random_headlines() {
    let mut rng = StdRng::seed_from_u64(0x4845_4144_4c49_4e45);
    let mut checked = 0usize;

    for _ in 0..500 {
        let h = random_headline(&mut rng);
        if h.is_empty() {
            assert_eq!(analyze(&h), Err(AnalysisError::MissingHeadline));
            continue;
        }
        let r = analyze(&h).expect("non-empty headline must analyze");
        let st = &r.structural_analysis;

        assert_eq!(st.word_count, r.tokens.len(), "{h:?}");
        assert_eq!(st.character_count, h.encode_utf16().count(), "{h:?}");

        let edge = st.word_count.min(3);
        assert_eq!(st.beginning_words.len(), edge, "{h:?}");
        assert_eq!(st.ending_words.len(), edge, "{h:?}");
        assert_eq!(st.beginning_words[..], r.tokens[..edge], "{h:?}");
        assert_eq!(st.ending_words[..], r.tokens[r.tokens.len() - edge..], "{h:?}");

        assert!(!st.headline_type.is_empty(), "{h:?}");
        let has_general = st.headline_type.contains(&HeadlineType::General);
        assert_eq!(has_general, st.headline_type == vec![HeadlineType::General], "{h:?}");

        assert!(r.tokens.iter().all(|t| *t == t.to_lowercase()), "{h:?}");
        assert!(r.score.is_finite(), "{h:?}");
        assert!(r.readability_analysis.flesch_kincaid_grade.is_finite());
        assert!(r.readability_analysis.flesch_reading_ease.is_finite());

        let wb = &r.semantic_analysis.word_balance;
        for list in [
            &wb.common_words,
            &wb.uncommon_words,
            &wb.emotional_words,
            &wb.power_words,
        ] {
            assert!(list.len() <= r.tokens.len(), "{h:?}");
            assert!(list.iter().all(|w| r.tokens.contains(w)), "{h:?}");
        }

        checked += 1;
    }

    assert!(checked > 400, "too few non-empty samples: {checked}");
}

#[test]
fn analysis_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let h = random_headline(&mut rng);
        assert_eq!(analyze(&h), analyze(&h), "{h:?}");
    }
}

#[test]
fn symbol_only_headline_has_zero_ratio_factors() {
    let r = analyze("?!  ...").unwrap();
    assert!(r.tokens.is_empty());
    assert_eq!(r.structural_analysis.headline_type, vec![HeadlineType::Question]);
    let wb = &r.semantic_analysis.word_balance;
    assert!(wb.common_words.is_empty() && wb.power_words.is_empty());
    // length 7/60*100*0.4 + grade (9 + 15.59)/9*100*0.05 + ease capped at 100*0.05
    let expected = 7.0 / 60.0 * 100.0 * 0.4 + (9.0 + 15.59) / 9.0 * 100.0 * 0.05 + 5.0;
    assert!((r.score - expected).abs() < 1e-9, "score {}", r.score);
}

// src/lexicon.rs
//! Static word lists and the lexicon matcher.
//!
//! Five read-only tables are used by the pipeline:
//! - `common`, `uncommon`, `emotional`, `power`: word sets for the word balance
//! - `polarity`: word -> integer weight (-5..=5) for the sentiment sum
//!
//! Defaults are compiled in from `lexicons/*.json` and parsed once. An override
//! file (TOML or JSON) may replace any subset of the tables at startup:
//!
//! ```toml
//! power = ["ultimate", "proven"]
//!
//! [polarity]
//! great = 3
//! awful = -3
//! ```
//!
//! Tables are never mutated after load; share them via `Arc<Lexicons>`.

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

static EMBEDDED: Lazy<Lexicons> = Lazy::new(|| Lexicons {
    common: parse_embedded_set(include_str!("../lexicons/common.json")),
    uncommon: parse_embedded_set(include_str!("../lexicons/uncommon.json")),
    emotional: parse_embedded_set(include_str!("../lexicons/emotional.json")),
    power: parse_embedded_set(include_str!("../lexicons/power.json")),
    polarity: clean_polarity(
        serde_json::from_str::<HashMap<String, i32>>(include_str!("../lexicons/polarity.json"))
            .expect("valid polarity lexicon"),
    ),
});

fn parse_embedded_set(raw: &str) -> HashSet<String> {
    clean_set(serde_json::from_str::<Vec<String>>(raw).expect("valid word list"))
}

/// The four word-balance subsets of a headline's tokens.
///
/// Each list keeps token order and duplicates; a word may show up in several
/// lists because the sets overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordBalance {
    pub common_words: Vec<String>,
    pub uncommon_words: Vec<String>,
    pub emotional_words: Vec<String>,
    pub power_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lexicons {
    pub common: HashSet<String>,
    pub uncommon: HashSet<String>,
    pub emotional: HashSet<String>,
    pub power: HashSet<String>,
    pub polarity: HashMap<String, i32>,
}

/// Shape of an override file. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconOverride {
    common: Option<Vec<String>>,
    uncommon: Option<Vec<String>>,
    emotional: Option<Vec<String>>,
    power: Option<Vec<String>>,
    polarity: Option<HashMap<String, i32>>,
}

impl Lexicons {
    /// Compiled-in default tables (parsed on first use).
    pub fn embedded() -> &'static Lexicons {
        &EMBEDDED
    }

    /// Embedded defaults with the tables found in `path` swapped in.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon override from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let ov = parse_override(&content, &ext)
            .with_context(|| format!("parsing lexicon override {}", path.display()))?;

        let lex = Self::embedded().clone().with_override(ov);
        info!(
            path = %path.display(),
            common = lex.common.len(),
            uncommon = lex.uncommon.len(),
            emotional = lex.emotional.len(),
            power = lex.power.len(),
            polarity = lex.polarity.len(),
            "lexicon override loaded"
        );
        Ok(lex)
    }

    fn with_override(mut self, ov: LexiconOverride) -> Self {
        if let Some(v) = ov.common {
            self.common = clean_set(v);
        }
        if let Some(v) = ov.uncommon {
            self.uncommon = clean_set(v);
        }
        if let Some(v) = ov.emotional {
            self.emotional = clean_set(v);
        }
        if let Some(v) = ov.power {
            self.power = clean_set(v);
        }
        if let Some(m) = ov.polarity {
            self.polarity = clean_polarity(m);
        }
        self
    }

    /// Filter `tokens` against the four word sets.
    pub fn word_balance(&self, tokens: &[String]) -> WordBalance {
        let pick = |set: &HashSet<String>| -> Vec<String> {
            tokens
                .iter()
                .filter(|t| set.contains(t.as_str()))
                .cloned()
                .collect()
        };
        WordBalance {
            common_words: pick(&self.common),
            uncommon_words: pick(&self.uncommon),
            emotional_words: pick(&self.emotional),
            power_words: pick(&self.power),
        }
    }

    /// Polarity weight of a lowercase word (0 if unlisted).
    #[inline]
    pub fn polarity_of(&self, word: &str) -> i32 {
        self.polarity.get(word).copied().unwrap_or(0)
    }
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::embedded().clone()
    }
}

fn parse_override(s: &str, hint_ext: &str) -> Result<LexiconOverride> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        _ => {
            if let Ok(v) = serde_json::from_str(s) {
                return Ok(v);
            }
            toml::from_str(s).map_err(|e| anyhow!("unsupported lexicon format: {e}"))
        }
    }
}

fn clean_set(items: Vec<String>) -> HashSet<String> {
    items
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn clean_polarity(map: HashMap<String, i32>) -> HashMap<String, i32> {
    map.into_iter()
        .map(|(w, v)| (w.trim().to_lowercase(), v))
        .filter(|(w, _)| !w.is_empty())
        .collect()
}

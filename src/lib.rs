// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod analysis;
pub mod api;
pub mod config;
pub mod lexicon;
pub mod metrics;
pub mod readability;
pub mod scoring;
pub mod sentiment;
pub mod structure;
pub mod tokenizer;

// ---- Re-exports for stable public API ----
pub use crate::analysis::{analyze, analyze_headline, AnalysisError, AnalysisResult};
pub use crate::api::{create_router, router, AppState};
pub use crate::lexicon::{Lexicons, WordBalance};
pub use crate::structure::HeadlineType;

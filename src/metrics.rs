// src/metrics.rs
use axum::{routing::get, Router};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::analysis::AnalysisResult;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Call once per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("headline_analyses_total", "Headlines analyzed successfully.");
        describe_counter!(
            "headline_rejected_total",
            "Requests rejected for a missing or empty headline."
        );
        describe_histogram!("headline_score", "Composite headline score.");
        describe_histogram!("headline_word_count", "Tokens per analyzed headline.");
    });
}

/// No-op when no recorder is installed (library use, tests).
pub fn record_analysis(result: &AnalysisResult) {
    counter!("headline_analyses_total").increment(1);
    histogram!("headline_score").record(result.score);
    histogram!("headline_word_count").record(result.structural_analysis.word_count as f64);
}

pub fn record_rejected() {
    counter!("headline_rejected_total").increment(1);
}

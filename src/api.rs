// src/api.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::analysis::{analyze_headline, AnalysisError, AnalysisResult};
use crate::lexicon::Lexicons;
use crate::metrics;

#[derive(Clone)]
pub struct AppState {
    pub lexicons: Arc<Lexicons>,
}

impl AppState {
    pub fn new(lexicons: Lexicons) -> Self {
        Self {
            lexicons: Arc::new(lexicons),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Lexicons::embedded().clone())
    }
}

/// Router with the compiled-in lexicons.
pub fn router() -> Router {
    create_router(AppState::default())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(analyze))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// First non-empty `headline` value; repeated keys don't reject the request.
fn pick_headline(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find(|(k, v)| k == "headline" && !v.is_empty())
        .map(|(_, v)| v)
        .unwrap_or_default()
}

async fn analyze(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<AnalysisResult>, AnalysisError> {
    let headline = match query {
        Ok(Query(pairs)) => pick_headline(pairs),
        Err(e) => {
            debug!(target: "api", error = %e, "unreadable query string");
            String::new()
        }
    };

    match analyze_headline(&headline, &state.lexicons) {
        Ok(result) => {
            metrics::record_analysis(&result);
            Ok(Json(result))
        }
        Err(e) => {
            metrics::record_rejected();
            info!(target: "api", error = %e, "headline rejected");
            Err(e)
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match self {
            AnalysisError::MissingHeadline => StatusCode::BAD_REQUEST,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

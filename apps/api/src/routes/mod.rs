pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as api;
use crate::state::AppState;
use crate::ui::handlers as ui;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(ui::handle_index))
        .route("/analyze", post(ui::handle_analyze_form))
        // JSON API
        .route("/api/v1/analyze", post(api::handle_analyze))
        .with_state(state)
}

/// Router used when no API key could be resolved at startup.
/// Nothing here can reach the analyzer: every path shows the configuration error.
pub fn build_unconfigured_router() -> Router {
    Router::new()
        .route("/health", get(health::unconfigured_health_handler))
        .fallback(ui::handle_not_configured)
}

use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing per visitor: each result travels only on the page it was rendered into.
#[derive(Clone)]
pub struct AppState {
    /// Text generator behind the analyzer. `LlmClient` in production.
    pub llm: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

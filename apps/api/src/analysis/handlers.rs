//! Axum route handlers for the JSON analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyze_gaps;
use crate::analysis::validation::validate_inputs;
use crate::errors::AppError;
use crate::state::AppState;

/// Missing fields default to empty so they fail validation like short ones.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Generated prep text, or an `"Error: ..."` string if the model call failed.
    pub result: String,
}

/// POST /api/v1/analyze
///
/// Validates both inputs, runs one gap analysis and returns the result.
/// Provider failures still answer 200: they arrive as `"Error: ..."` text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    validate_inputs(&request.job_description, &request.resume)?;

    let result = analyze_gaps(state.llm.as_ref(), &request.job_description, &request.resume).await;

    Ok(Json(AnalyzeResponse { result }))
}

//! Axum route handlers for the HTML page.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::analysis::analyzer::analyze_gaps;
use crate::analysis::validation::validate_inputs;
use crate::credentials::NOT_CONFIGURED_MESSAGE;
use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::pages::{ConfigErrorPage, IndexPage};

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage::blank().render()?))
}

/// POST /analyze
///
/// Short inputs re-render the page with an inline error and never reach the
/// analyzer. Otherwise the result, success or `"Error: ..."`, is shown along
/// with a download link carrying exactly that text.
pub async fn handle_analyze_form(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Response, AppError> {
    if let Err(e) = validate_inputs(&form.job_description, &form.resume) {
        let page = IndexPage::new(&form.job_description, &form.resume).with_error(e);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page.render()?)).into_response());
    }

    let result = analyze_gaps(state.llm.as_ref(), &form.job_description, &form.resume).await;

    let page = IndexPage::new(&form.job_description, &form.resume).with_result(&result);
    Ok(Html(page.render()?).into_response())
}

/// Every page of an unconfigured service.
pub async fn handle_not_configured() -> Result<Response, AppError> {
    let page = ConfigErrorPage {
        message: NOT_CONFIGURED_MESSAGE,
    };
    Ok((StatusCode::SERVICE_UNAVAILABLE, Html(page.render()?)).into_response())
}

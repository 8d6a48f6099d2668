//! Gap Analyzer — maps (job description, resume) to interview-prep text.
//!
//! This is the error boundary of the service: every failure from the model
//! request is flattened into an `"Error: ..."` string returned on the same
//! channel as a successful result.

use tracing::{info, warn};

use crate::analysis::prompts::build_gap_analysis_prompt;
use crate::llm_client::TextGenerator;

pub const ERROR_PREFIX: &str = "Error: ";

/// Runs one gap analysis. Never fails and never returns an empty string.
///
/// Callers are expected to have run `validate_inputs` first.
pub async fn analyze_gaps(
    generator: &dyn TextGenerator,
    job_description: &str,
    resume: &str,
) -> String {
    info!(
        "Starting gap analysis: job_description_chars={}, resume_chars={}",
        job_description.chars().count(),
        resume.chars().count()
    );

    let prompt = build_gap_analysis_prompt(job_description, resume);

    match generator.generate(&prompt).await {
        Ok(text) => {
            info!("Gap analysis complete: result_chars={}", text.chars().count());
            text
        }
        Err(e) => {
            warn!("Gap analysis failed: {e}");
            format!("{ERROR_PREFIX}{e}")
        }
    }
}

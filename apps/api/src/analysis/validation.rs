use thiserror::Error;

/// Minimum length, in characters, of each input before an analysis is run.
pub const MIN_INPUT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("⚠️ Please paste a complete job description (at least 50 characters)")]
    JobDescriptionTooShort,

    #[error("⚠️ Please paste your resume (at least 50 characters)")]
    ResumeTooShort,
}

/// Gates an analysis request. The job description is checked first, so only
/// the first violation is reported.
///
/// Length is counted in characters, not bytes, and nothing is trimmed.
pub fn validate_inputs(job_description: &str, resume: &str) -> Result<(), ValidationError> {
    if job_description.chars().count() < MIN_INPUT_CHARS {
        return Err(ValidationError::JobDescriptionTooShort);
    }
    if resume.chars().count() < MIN_INPUT_CHARS {
        return Err(ValidationError::ResumeTooShort);
    }
    Ok(())
}

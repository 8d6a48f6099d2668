//! Prompt for the interview gap analysis.

/// Builds the gap-analysis prompt.
///
/// Both inputs are inserted verbatim in a single pass, so text that happens
/// to look like a placeholder inside a resume is never expanded again.
pub fn build_gap_analysis_prompt(job_description: &str, resume: &str) -> String {
    format!(
        r#"You are an expert career coach and interviewer.

Compare this job description with this candidate's resume and help them prepare for the interview.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}

Please provide:

1. SKILL GAPS (3-5 items)
   - List specific skills, experiences, or qualifications mentioned in the job that are missing or weak in the resume
   - Focus on requirements, not nice-to-haves
   - Be specific (e.g., "No SQL experience mentioned" not just "lacking technical skills")

2. TOUGH INTERVIEW QUESTIONS (1 question per gap)
   - For each gap, generate one behavioral or technical question an interviewer might ask to probe that weakness
   - Make questions realistic and specific to the role
   - Frame as actual interview questions (e.g., "Tell me about a time when...")

3. PREPARATION SUGGESTIONS (brief, 1-2 sentences per gap)
   - How the candidate can quickly build credibility in this area
   - What stories from their resume could be reframed to address this
   - What they should study/review before the interview

Format your response clearly with headers for each section."#
    )
}

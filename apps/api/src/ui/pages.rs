use askama::Template;

pub const DOWNLOAD_FILE_NAME: &str = "interview_prep.txt";
const DOWNLOAD_MIME: &str = "text/plain;charset=utf-8";

pub const JOB_DESCRIPTION_PLACEHOLDER: &str =
    "Copy and paste the job description from LinkedIn, Indeed, or company website...";
pub const RESUME_PLACEHOLDER: &str = "Copy and paste your resume text here...";

/// `data:` URL whose payload is `text`, percent-encoded byte for byte.
pub fn download_href(text: &str) -> String {
    format!("data:{DOWNLOAD_MIME},{}", urlencoding::encode(text))
}

/// The single analysis page. `error` and `result` are mutually exclusive in
/// practice: a validation error means no analysis was run.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub job_description: &'a str,
    pub resume: &'a str,
    pub error: Option<String>,
    pub result: Option<&'a str>,
    /// Empty unless `result` is set.
    pub download_href: String,
    pub job_description_placeholder: &'a str,
    pub resume_placeholder: &'a str,
    pub download_file_name: &'a str,
}

impl<'a> IndexPage<'a> {
    pub fn new(job_description: &'a str, resume: &'a str) -> Self {
        Self {
            job_description,
            resume,
            error: None,
            result: None,
            download_href: String::new(),
            job_description_placeholder: JOB_DESCRIPTION_PLACEHOLDER,
            resume_placeholder: RESUME_PLACEHOLDER,
            download_file_name: DOWNLOAD_FILE_NAME,
        }
    }

    pub fn blank() -> Self {
        Self::new("", "")
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_result(mut self, result: &'a str) -> Self {
        self.result = Some(result);
        self.download_href = download_href(result);
        self
    }
}

#[derive(Template)]
#[template(path = "config_error.html")]
pub struct ConfigErrorPage<'a> {
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_has_form_and_placeholders() {
        let html = IndexPage::blank().render().unwrap();
        assert!(html.contains(r#"action="/analyze""#));
        assert!(html.contains(JOB_DESCRIPTION_PLACEHOLDER));
        assert!(html.contains(RESUME_PLACEHOLDER));
        assert!(!html.contains("Analysis Results"));
        assert!(!html.contains("data:text/plain"));
    }

    #[test]
    fn test_error_is_rendered_inline_and_inputs_kept() {
        let html = IndexPage::new("too short", "also short")
            .with_error("⚠️ Please paste your resume (at least 50 characters)")
            .render()
            .unwrap();
        assert!(html.contains("Please paste your resume"));
        assert!(html.contains(">too short</textarea>"));
        assert!(!html.contains("Download Results"));
    }

    #[test]
    fn test_result_is_escaped_and_offered_for_download() {
        let html = IndexPage::blank()
            .with_result("Skill Gaps: <none> & more")
            .render()
            .unwrap();
        assert!(html.contains("Skill Gaps: &lt;none&gt; &amp; more"));
        assert!(html.contains(r#"href="data:text/plain;charset=utf-8,Skill%20Gaps%3A%20%3Cnone%3E%20%26%20more""#));
        assert!(html.contains(r#"download="interview_prep.txt""#));
    }

    #[test]
    fn test_download_href_round_trips_exact_bytes() {
        let text = "## Gaps\r\n- SQL\n\n  ünïcode ✅ \"quoted\"  ";
        let href = download_href(text);
        let payload = href.strip_prefix("data:text/plain;charset=utf-8,").unwrap();
        assert!(payload
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"%-_.~".contains(&b)));
        assert_eq!(urlencoding::decode(payload).unwrap(), text);
    }

    #[test]
    fn test_config_error_page_has_no_form() {
        let html = ConfigErrorPage {
            message: "⚠️ API key not configured. Please contact the developer.",
        }
        .render()
        .unwrap();
        assert!(html.contains("API key not configured"));
        assert!(!html.contains("<form"));
    }
}

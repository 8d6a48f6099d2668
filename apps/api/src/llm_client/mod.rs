//! LLM Client — the single point of entry for all Claude API calls.
//!
//! No other module talks to the Anthropic API directly. Callers depend on the
//! `TextGenerator` trait so they can be exercised without the network.
//!
//! Model: claude-sonnet-4-20250514 (hardcoded, together with the output cap)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::credentials::ApiKey;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for every gap analysis.
pub const MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Text of the first content segment, if that segment is a text block.
    /// Later segments are never consulted.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .first()
            .filter(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Thin wrapper over the Anthropic Messages API.
/// One request per call: no retries, and no timeout beyond reqwest's defaults.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: ApiKey,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: ApiKey, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), MESSAGES_PATH),
        }
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", self.api_key.expose())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        match response.first_text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::with_base_url(ApiKey::new("test-key").unwrap(), &server.base_url())
    }

    #[test]
    fn test_first_text_takes_only_first_block() {
        let response: LlmResponse = serde_json::from_value(json!({
            "content": [
                {"type": "text", "text": "first"},
                {"type": "text", "text": "second"}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("first"));
    }

    #[test]
    fn test_first_text_none_when_first_block_not_text() {
        let response: LlmResponse = serde_json::from_value(json!({
            "content": [
                {"type": "tool_use"},
                {"type": "text", "text": "later"}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client =
            LlmClient::with_base_url(ApiKey::new("k").unwrap(), "http://localhost:9999/");
        assert_eq!(client.endpoint, "http://localhost:9999/v1/messages");
    }

    #[tokio::test]
    async fn test_generate_sends_fixed_model_and_token_cap() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/messages")
                    .header("x-api-key", "test-key")
                    .header("anthropic-version", ANTHROPIC_VERSION)
                    .json_body(json!({
                        "model": MODEL,
                        "max_tokens": 2000,
                        "messages": [{"role": "user", "content": "hello"}]
                    }));
                then.status(200).json_body(json!({
                    "content": [{"type": "text", "text": "## Skill Gaps\n- SQL"}],
                    "usage": {"input_tokens": 10, "output_tokens": 5}
                }));
            })
            .await;

        let text = client_for(&server).generate("hello").await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "## Skill Gaps\n- SQL");
    }

    #[tokio::test]
    async fn test_api_error_message_is_extracted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(401).json_body(json!({
                    "type": "error",
                    "error": {"type": "authentication_error", "message": "invalid x-api-key"}
                }));
            })
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid x-api-key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_api_error_falls_back_to_raw_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(529).body("Overloaded");
            })
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "API error (status 529): Overloaded");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_empty_content_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(json!({"content": []}));
            })
            .await;

        let err = client_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}

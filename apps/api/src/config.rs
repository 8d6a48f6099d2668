use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

/// Application configuration loaded from environment variables.
///
/// The Anthropic API key is not part of this struct; it comes from
/// `credentials::resolve_api_key`, and a missing key selects unconfigured mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub secrets_path: PathBuf,
    /// Overrides the Anthropic API host. Unset means the public endpoint.
    pub anthropic_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            secrets_path: std::env::var("SECRETS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_PATH)),
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL").ok(),
        })
    }
}

mod analysis;
mod config;
mod credentials;
mod errors;
mod llm_client;
mod routes;
mod state;
mod ui;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::credentials::{resolve_api_key, TomlSecretStore, API_KEY_NAME};
use crate::llm_client::LlmClient;
use crate::routes::{build_router, build_unconfigured_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; the API key is resolved separately below
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Weakness Spotter v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the API key once: secret store first, then environment
    let secrets = TomlSecretStore::new(&config.secrets_path);
    info!("Secret store: {}", secrets.path().display());
    let api_key = resolve_api_key(&secrets, std::env::var(API_KEY_NAME).ok());

    let app = match api_key {
        Ok(api_key) => {
            let llm = match &config.anthropic_base_url {
                Some(base_url) => LlmClient::with_base_url(api_key, base_url),
                None => LlmClient::new(api_key),
            };
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            build_router(AppState::new(Arc::new(llm)))
        }
        Err(e) => {
            // Serve only the configuration error; the analyzer is never mounted
            error!("{e}. Serving configuration error page only");
            build_unconfigured_router()
        }
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

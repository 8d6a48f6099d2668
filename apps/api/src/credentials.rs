//! Credential resolution for the Anthropic API key.
//!
//! Sources, in priority order:
//! 1. the secret store (a TOML file of top-level string keys)
//! 2. the `ANTHROPIC_API_KEY` environment variable
//!
//! Resolution happens once at startup. The resulting `ApiKey` is handed to the
//! LLM client by constructor and never re-read.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub const API_KEY_NAME: &str = "ANTHROPIC_API_KEY";

/// Shown to users when no credential could be resolved.
pub const NOT_CONFIGURED_MESSAGE: &str = "⚠️ API key not configured. Please contact the developer.";

/// A non-empty API key. `Debug` is redacted so the key stays out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for empty or whitespace-only values.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("secret store {} not found", path.display())]
    Missing { path: PathBuf },

    #[error("secret store {} could not be read: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("secret store {} is not valid TOML: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("ANTHROPIC_API_KEY is not set in the secret store or the environment")]
    NotConfigured,
}

/// A source of named secrets.
///
/// `Ok(None)` means the store was reachable but holds no usable value for the
/// key; `Err` means the store itself is unavailable.
pub trait SecretStore {
    fn lookup(&self, key: &str) -> Result<Option<String>, SecretStoreError>;
}

/// Reads secrets from a TOML file with top-level string keys.
#[derive(Debug, Clone)]
pub struct TomlSecretStore {
    path: PathBuf,
}

impl TomlSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SecretStore for TomlSecretStore {
    fn lookup(&self, key: &str) -> Result<Option<String>, SecretStoreError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SecretStoreError::Missing {
                    path: self.path.clone(),
                }
            } else {
                SecretStoreError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let table: toml::Table =
            toml::from_str(&content).map_err(|source| SecretStoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        Ok(table
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }
}

/// Resolves the API key: secret store first, then `env_value`.
///
/// `env_value` is the raw `ANTHROPIC_API_KEY` environment value, if any.
pub fn resolve_api_key(
    store: &dyn SecretStore,
    env_value: Option<String>,
) -> Result<ApiKey, CredentialError> {
    match store.lookup(API_KEY_NAME) {
        Ok(Some(value)) => {
            if let Some(key) = ApiKey::new(value) {
                info!("{API_KEY_NAME} resolved from secret store");
                return Ok(key);
            }
            debug!("{API_KEY_NAME} is empty in secret store, falling back to environment");
        }
        Ok(None) => {
            debug!("{API_KEY_NAME} not present in secret store, falling back to environment");
        }
        Err(e @ SecretStoreError::Missing { .. }) => {
            debug!("{e}, falling back to environment");
        }
        Err(e) => {
            warn!("{e}, falling back to environment");
        }
    }

    match env_value.and_then(ApiKey::new) {
        Some(key) => {
            info!("{API_KEY_NAME} resolved from environment");
            Ok(key)
        }
        None => Err(CredentialError::NotConfigured),
    }
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

/// Value shipped in the sample secrets file. Treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your-actual-gemini-api-key-here";

const DEFAULT_SECRETS_FILE: &str = ".streamlit/secrets.toml";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Only the bind settings are validated; a missing API key is not an error,
/// it switches the service into fallback mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    /// Sessions untouched for this long are discarded.
    pub session_idle_ttl: Duration,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_file = std::env::var("SECRETS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_FILE));

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: resolve_api_key(&secrets_file, std::env::var("GEMINI_API_KEY").ok()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            session_idle_ttl: Duration::from_secs(
                std::env::var("SESSION_IDLE_TTL_SECS")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse::<u64>()
                    .context("SESSION_IDLE_TTL_SECS must be a whole number of seconds")?,
            ),
            max_sessions: std::env::var("MAX_SESSIONS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse::<usize>()
                .context("MAX_SESSIONS must be a positive integer")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    api_keys: Option<ApiKeys>,
}

#[derive(Debug, Deserialize)]
struct ApiKeys {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// Picks the Gemini key from the secrets file, then from the environment value.
/// Blank keys and the sample placeholder resolve to `None`.
pub fn resolve_api_key(secrets_file: &Path, env_value: Option<String>) -> Option<String> {
    let from_file = match read_secrets_key(secrets_file) {
        Ok(key) => key,
        Err(e) => {
            warn!("Ignoring secrets file {}: {e:#}", secrets_file.display());
            None
        }
    };

    from_file
        .or(env_value)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
}

fn read_secrets_key(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!("No secrets file at {}", path.display());
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let secrets: SecretsFile = toml::from_str(&raw).context("Secrets file is not valid TOML")?;

    Ok(secrets.api_keys.and_then(|keys| keys.gemini_api_key))
}

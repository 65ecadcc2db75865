use anyhow::{Context, Result};

use crate::handoff::DEFAULT_HANDOFF_TTL_SECS;
use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent → plan generation is offline and results fall back to mock data.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Absent → in-memory hand-off store.
    pub redis_url: Option<String>,
    pub handoff_ttl_secs: u64,
    /// Fixes the pseudo-random source for reproducible previews and predictions.
    pub jitter_seed: Option<u64>,
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
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            redis_url: optional_env("REDIS_URL"),
            handoff_ttl_secs: optional_env("HANDOFF_TTL_SECS")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("HANDOFF_TTL_SECS must be a whole number of seconds")?
                .unwrap_or(DEFAULT_HANDOFF_TTL_SECS),
            jitter_seed: optional_env("JITTER_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("JITTER_SEED must be an unsigned integer")?,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Offline, in-memory configuration for handler tests.
    pub fn for_tests(jitter_seed: Option<u64>) -> Self {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            redis_url: None,
            handoff_ttl_secs: DEFAULT_HANDOFF_TTL_SECS,
            jitter_seed,
        }
    }
}

/// Reads `key`, treating an unset or blank variable as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

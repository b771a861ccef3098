// src/config.rs
use crate::errors::{PlaygroundError, Result};

pub const DEFAULT_EXECUTION_API_BASE: &str = "https://emkc.org/api/v2/piston";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Configuration for the remote execution service.
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    pub api_base: String,
}

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub execution: ExecutionConfig,
    /// `None` when no API key is configured; failing runs then come back without a fix.
    pub gemini: Option<GeminiConfig>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| PlaygroundError::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => 5000,
        };
        let request_timeout_secs = match non_empty("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                PlaygroundError::Config(format!(
                    "REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => 30,
        };

        let execution = ExecutionConfig {
            api_base: non_empty("EXECUTION_API_BASE")
                .unwrap_or_else(|| DEFAULT_EXECUTION_API_BASE.to_string()),
        };

        let gemini = non_empty("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_base: non_empty("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            api_key,
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        });

        Ok(AppConfig {
            host,
            port,
            execution,
            gemini,
            request_timeout_secs,
        })
    }
}

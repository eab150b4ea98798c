use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated; a missing API key surfaces later as an upstream auth failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub deepseek_api_key: String,
    pub deepseek_api_url: String,
    /// Replaces the embedded experience text when set.
    pub resume_experience_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    /// Fallback level for the log filter. The subscriber reads `RUST_LOG` itself, so
    /// this only applies when `RUST_LOG` is unset or unparseable.
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            deepseek_api_key: lookup("DEEPSEEK_API_KEY").unwrap_or_default(),
            deepseek_api_url: lookup("DEEPSEEK_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            resume_experience_path: lookup("RESUME_EXPERIENCE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

//! Completion endpoint configuration

use crop_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.siliconflow.cn/v1/completions";
pub const DEFAULT_MODEL: &str = "Qwen/Qwen2-7B-Instruct";

/// Configuration for the completion client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Bearer token; without one every request fails with a configuration error
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl CompletionConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("CROP_LLM_API_KEY")
            .or_else(|_| env::var("SILICONFLOW_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            tracing::debug!("no API key configured; advice requests will return an error");
        }

        let api_url = env::var("CROP_LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("CROP_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = match env::var("CROP_LLM_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                Error::Configuration(format!(
                    "CROP_LLM_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            api_url,
            model,
            timeout_secs,
        })
    }

    /// Create configuration with explicit values
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }

    /// Configuration without an API key
    pub fn without_key() -> Self {
        Self {
            api_key: None,
            ..Self::new(String::new())
        }
    }

    /// Point the client at a different endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

//! Advice provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Error, Result};

/// Configuration for a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// `None` waits for the endpoint indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_id: "Qwen/Qwen2-7B-Instruct".to_string(),
            max_tokens: 200,
            temperature: 0.7,
            timeout: None,
        }
    }
}

/// Result of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub model_id: String,
}

/// Trait for advice backends (remote completion endpoints, test doubles)
///
/// Implementors only provide the fallible calls. Callers that need a
/// displayable answer go through [`AdviceProvider::advise`], which never fails.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Complete a prompt with the provider's default configuration
    async fn generate(&self, prompt: &str) -> Result<GenerationResult>;

    /// Complete a prompt with custom configuration
    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;

    /// Complete a prompt and always return something printable
    async fn advise(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(result) => result.text,
            Err(e) => {
                tracing::debug!(error = %e, "advice request failed");
                describe_failure(&e)
            }
        }
    }
}

/// Turn a provider error into the text shown in place of an answer
pub fn describe_failure(error: &Error) -> String {
    match error {
        Error::EmptyResponse => format!("Error: {}", error),
        other => format!("Error: Failed to connect to the completion API - {}", other),
    }
}

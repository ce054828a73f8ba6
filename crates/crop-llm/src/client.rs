//! HTTP completion client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

use crop_core::{AdviceProvider, Error, GenerationConfig, GenerationResult, Result};

use crate::config::CompletionConfig;

/// Client for an OpenAI-style `/v1/completions` endpoint
pub struct CompletionClient {
    config: CompletionConfig,
    client: Client,
    current_model: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl CompletionClient {
    /// Create a new completion client from configuration
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        let current_model = config.model.clone();

        Ok(Self {
            config,
            client,
            current_model,
        })
    }

    /// Create a new completion client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = CompletionConfig::from_env()?;
        Self::new(config)
    }

    /// Set the model to use for completions
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.current_model = model_id.into();
        self
    }

    fn default_generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            model_id: self.current_model.clone(),
            timeout: self.config.timeout_secs.map(Duration::from_secs),
            ..Default::default()
        }
    }

    /// Perform the actual completion request
    async fn perform_completion(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            Error::Configuration(
                "CROP_LLM_API_KEY or SILICONFLOW_API_KEY environment variable not found".to_string(),
            )
        })?;

        let request_body = CompletionRequest {
            model: &config.model_id,
            prompt,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        tracing::debug!(
            url = %self.config.api_url,
            model = %config.model_id,
            prompt_len = prompt.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        tracing::debug!(%status, body_len = body.len(), "completion response received");

        interpret_response(status, &body)
    }
}

/// Extract the first completion's text from a raw response
pub(crate) fn interpret_response(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        return Err(Error::LLMProvider(format!(
            "completion request failed with status {}: {}",
            status,
            body.trim()
        )));
    }

    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| Error::Serialization(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text.trim().to_string())
        .ok_or(Error::EmptyResponse)
}

#[async_trait]
impl AdviceProvider for CompletionClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let config = self.default_generation_config();
        self.generate_with_config(prompt, &config).await
    }

    async fn generate_with_config(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let completion = self.perform_completion(prompt, config);

        let text = match config.timeout {
            Some(limit) => match timeout(limit, completion).await {
                Ok(result) => result?,
                Err(_) => return Err(Error::Timeout("Request timed out".to_string())),
            },
            None => completion.await?,
        };

        Ok(GenerationResult {
            text,
            model_id: config.model_id.clone(),
        })
    }

    fn model_id(&self) -> &str {
        &self.current_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_is_trimmed() {
        let body = r#"{"choices":[{"text":"  Drain the low corner.\n"},{"text":"ignored"}]}"#;
        let text = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(text, "Drain the low corner.");
    }

    #[test]
    fn test_missing_choices_is_empty_response() {
        assert!(matches!(
            interpret_response(StatusCode::OK, r#"{"choices":[]}"#),
            Err(Error::EmptyResponse)
        ));
        assert!(matches!(
            interpret_response(StatusCode::OK, r#"{"id":"cmpl-1"}"#),
            Err(Error::EmptyResponse)
        ));
    }

    #[test]
    fn test_non_success_status_is_provider_error() {
        let err = interpret_response(StatusCode::UNAUTHORIZED, "invalid api key").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid api key"));
    }

    #[test]
    fn test_malformed_body_is_serialization_error() {
        assert!(matches!(
            interpret_response(StatusCode::OK, "<html>"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_model_override() {
        let client = CompletionClient::new(CompletionConfig::new("key"))
            .unwrap()
            .with_model("Qwen/Qwen2.5-7B-Instruct");
        assert_eq!(client.model_id(), "Qwen/Qwen2.5-7B-Instruct");
    }

    #[tokio::test]
    async fn test_missing_key_yields_error_text() {
        // the URL is unreachable too, so a request that went out would report a network error
        let config =
            CompletionConfig::without_key().with_api_url("http://127.0.0.1:1/v1/completions");
        let client = CompletionClient::new(config).unwrap();

        let err = client.generate("Is the soil too dry?").await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let answer = client.advise("Is the soil too dry?").await;
        assert!(answer.starts_with("Error:"), "unexpected answer: {}", answer);
        assert!(answer.contains("CROP_LLM_API_KEY"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_error_text() {
        let config =
            CompletionConfig::new("key").with_api_url("http://127.0.0.1:1/v1/completions");
        let client = CompletionClient::new(config).unwrap();

        let answer = client.advise("How wet is too wet?").await;
        assert!(answer.starts_with("Error:"), "unexpected answer: {}", answer);
    }
}

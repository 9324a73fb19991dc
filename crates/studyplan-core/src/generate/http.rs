//! HTTP client for a hosted text-generation inference endpoint.
//!
//! Speaks the Hugging Face Inference API shape: POST to
//! `{base_url}/models/{model}` with `{"inputs": ..., "parameters":
//! {"max_new_tokens": ...}}`. Depending on the task the model is served
//! under, the reply carries its text in `generated_text` or `summary_text`;
//! both are accepted. One request per call, no automatic retries; the only
//! hardening over the bare call is the request timeout.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::{GenerationClient, GenerationError, GenerationRequest};

/// Configuration for [`HttpGenerationClient`].
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL of the inference service
    pub base_url: String,
    /// Model identifier, e.g. `google/flan-t5-small`
    pub model: String,
    /// Optional bearer token for the service
    pub api_token: Option<String>,
    /// Request deadline
    pub timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-inference.huggingface.co".to_string(),
            model: "google/flan-t5-small".to_string(),
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Generation client backed by an HTTP inference service.
pub struct HttpGenerationClient {
    config: GenerationConfig,
    http: Client,
}

impl HttpGenerationClient {
    /// Creates a client from configuration.
    pub fn from_config(config: GenerationConfig) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GenerationError::Network)?;

        Ok(Self { config, http })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// One generated sequence as returned by the service.
///
/// The field holding the text depends on the task type the model is served
/// under; exactly one of the two is expected to be present.
#[derive(Debug, Deserialize)]
struct GeneratedSequence {
    generated_text: Option<String>,
    summary_text: Option<String>,
}

impl GeneratedSequence {
    fn into_text(self) -> Option<String> {
        self.generated_text.or(self.summary_text)
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let url = self.endpoint();
        debug!("Requesting up to {} tokens from {url}", request.max_new_tokens);

        let body = serde_json::json!({
            "inputs": request.prompt,
            "parameters": { "max_new_tokens": request.max_new_tokens },
        });

        let mut http_request = self.http.post(&url).json(&body);
        if let Some(token) = &self.config.api_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| GenerationError::from_reqwest(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sequences: Vec<GeneratedSequence> = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        sequences
            .into_iter()
            .next()
            .and_then(GeneratedSequence::into_text)
            .ok_or_else(|| {
                GenerationError::InvalidResponse("Response contained no generated text".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_model() {
        let client = HttpGenerationClient::from_config(GenerationConfig {
            base_url: "https://inference.example.com/".to_string(),
            model: "google/flan-t5-small".to_string(),
            api_token: None,
            timeout: Duration::from_secs(5),
        })
        .expect("Failed to build client");

        assert_eq!(
            client.endpoint(),
            "https://inference.example.com/models/google/flan-t5-small"
        );
    }

    #[test]
    fn test_sequence_accepts_either_text_field() {
        let generated: GeneratedSequence =
            serde_json::from_str(r#"{"generated_text": "Day 1: Learn."}"#).unwrap();
        assert_eq!(generated.into_text().as_deref(), Some("Day 1: Learn."));

        let summarized: GeneratedSequence =
            serde_json::from_str(r#"{"summary_text": "Day 1: Review."}"#).unwrap();
        assert_eq!(summarized.into_text().as_deref(), Some("Day 1: Review."));

        let empty: GeneratedSequence = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_text(), None);
    }
}

//! GenerationClient trait definition.

use async_trait::async_trait;

use super::GenerationError;

/// A single text-generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Prompt sent to the model
    pub prompt: String,
    /// Upper bound on generated tokens
    pub max_new_tokens: u32,
}

/// Stateless client for the external text-generation service.
///
/// One prompt in, one generated string out. Each call is independent; no
/// conversation state is kept between calls, and the planner issues exactly
/// one call per generate action.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends one generation request and waits for the full response text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Scripted generation client for unit tests.
    ///
    /// Replays the given responses in order and fails with
    /// [`GenerationError::InvalidResponse`] once the script runs out.
    pub struct MockGenerationClient {
        responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    }

    impl MockGenerationClient {
        pub fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }

        /// A client that replays the given texts, one per call.
        pub fn replies<S: Into<String>>(texts: Vec<S>) -> Self {
            Self::new(texts.into_iter().map(|t| Ok(t.into())).collect())
        }

        /// A client whose first call already fails.
        pub fn failing() -> Self {
            Self::new(vec![])
        }
    }

    #[async_trait]
    impl GenerationClient for MockGenerationClient {
        async fn generate(&self, _request: GenerationRequest) -> Result<String, GenerationError> {
            self.responses
                .lock()
                .expect("mock response lock poisoned")
                .pop_front()
                .unwrap_or_else(|| {
                    Err(GenerationError::InvalidResponse(
                        "No scripted responses left".to_string(),
                    ))
                })
        }
    }

    #[tokio::test]
    async fn test_mock_replays_responses_in_order() {
        let client = MockGenerationClient::replies(vec!["first", "second"]);
        let request = GenerationRequest {
            prompt: "test".to_string(),
            max_new_tokens: 10,
        };

        assert_eq!(client.generate(request.clone()).await.unwrap(), "first");
        assert_eq!(client.generate(request.clone()).await.unwrap(), "second");
        assert!(client.generate(request).await.is_err());
    }
}

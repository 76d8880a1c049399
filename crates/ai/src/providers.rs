//! Completion service providers.
//!
//! The pipeline treats the hosted model as a black-box text-completion
//! service: one prompt in, raw text out. `GeminiProvider` talks to the
//! Google Generative Language REST API; `FakeCompletionProvider` returns
//! canned responses for tests.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Default model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Trait for single-shot text completion.
///
/// The call is a blocking external round-trip: the caller suspends until
/// a response or a transport failure. No retry or timeout policy is
/// applied here; integrating applications add their own if desired.
#[async_trait]
pub trait CompletionProviderTrait: Send + Sync {
    /// Sends one prompt and returns the model's raw text reply.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

// ============================================================================
// Gemini provider
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Completion provider backed by the Gemini `generateContent` endpoint.
pub struct GeminiProvider {
    http: HttpClient,
    api_key: String,
    model_id: String,
}

impl GeminiProvider {
    /// Creates a provider with an explicit key and model id.
    pub fn new(api_key: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            api_key: api_key.into(),
            model_id: model_id.into(),
        }
    }

    /// Creates a provider from `GOOGLE_API_KEY` and (optionally)
    /// `LEDGERLY_AI_MODEL`.
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .map_err(|_| AiError::MissingApiKey("gemini".to_string()))?;
        let model_id =
            std::env::var("LEDGERLY_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model_id))
    }
}

#[async_trait]
impl CompletionProviderTrait for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        debug!("Requesting completion from model {}", self.model_id);

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model_id);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Provider(format!(
                "completion request failed with status {}: {}",
                status, body
            )));
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        let text: String = reply
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(AiError::Provider(
                "completion response contained no text".to_string(),
            ));
        }

        Ok(text)
    }
}

// ============================================================================
// Fake provider for testing
// ============================================================================

/// A fake completion provider returning a fixed reply, for deterministic
/// tests of everything downstream of the model call.
pub struct FakeCompletionProvider {
    /// Fixed reply, or None to simulate a transport failure.
    pub reply: Option<String>,
}

impl FakeCompletionProvider {
    /// Creates a fake that returns the given text.
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
        }
    }

    /// Creates a fake that always fails like a transport error.
    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl CompletionProviderTrait for FakeCompletionProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(AiError::Provider("connection refused".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_returns_fixed_reply() {
        let provider = FakeCompletionProvider::with_reply("{\"transactions\": []}");
        let reply = provider.complete("anything").await.unwrap();
        assert_eq!(reply, "{\"transactions\": []}");
    }

    #[tokio::test]
    async fn test_fake_provider_failure() {
        let provider = FakeCompletionProvider::failing();
        let err = provider.complete("anything").await.unwrap_err();
        assert_eq!(err.code(), "PROVIDER_ERROR");
    }
}

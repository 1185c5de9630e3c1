//! Responder capability trait and HTTP client
//!
//! The orchestrator treats the language-model service as an opaque
//! text-in, text-or-list-out collaborator behind the [`Responder`]
//! trait. Production code uses [`HttpResponder`] (reqwest); tests
//! substitute deterministic implementations without network calls.

use async_trait::async_trait;
use reqwest::Client;
use stepwise_sdk::{GenerateRequest, GenerateResponse, Reply, StepwiseError};

use crate::config::Config;

/// Result type for responder operations
pub type Result<T> = std::result::Result<T, StepwiseError>;

/// Opaque text-completion collaborator
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a completion for a prompt
    ///
    /// # Returns
    /// * `Ok(Reply)` - A single string or an ordered list of strings
    /// * `Err(StepwiseError)` - If the service is unreachable, returns a
    ///   non-success status, or answers with an unparsable payload
    async fn generate(&self, prompt: &str) -> Result<Reply>;
}

/// HTTP client for the responder service
#[derive(Debug, Clone)]
pub struct HttpResponder {
    /// Base URL of the responder (no trailing slash)
    base_url: String,

    /// HTTP client with the configured request timeout
    client: Client,
}

impl HttpResponder {
    /// Create a new HTTP responder client from explicit configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StepwiseError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.responder_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn generate(&self, prompt: &str) -> Result<Reply> {
        let url = format!("{}/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StepwiseError::ServiceUnavailable(format!("Request to {} timed out", url))
                } else if e.is_connect() {
                    StepwiseError::ServiceUnavailable(format!(
                        "Cannot connect to responder at {}. Is the service running?",
                        self.base_url
                    ))
                } else {
                    StepwiseError::ServiceUnavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StepwiseError::ServiceUnavailable(format!(
                "Responder returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            StepwiseError::InvalidUpstreamResponse(format!(
                "Failed to parse responder payload: {}",
                e
            ))
        })?;

        Ok(parsed.response)
    }
}

//! Configuration management
//!
//! The orchestrator is configured from the environment:
//!
//! - `LLM_SERVICE_URL`: base URL of the responder. Defaults to the
//!   in-cluster DNS name of the mock LLM service.
//! - `STEPWISE_REQUEST_TIMEOUT_SECS`: outbound request timeout in
//!   seconds. Defaults to 30. There is no retry policy; a timed-out call
//!   fails the whole request.
//!
//! The resulting [`Config`] is passed explicitly into the responder
//! client rather than read ambiently, so tests can substitute any
//! address (or skip the HTTP client entirely via the `Responder` trait).

use std::time::Duration;

use stepwise_sdk::StepwiseError;

/// Default responder base URL (the in-cluster service DNS name)
pub const DEFAULT_RESPONDER_URL: &str =
    "http://mock-llm-service.llm-d-app.svc.cluster.local:8000";

/// Default outbound request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Orchestrator configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the responder service
    pub responder_url: String,

    /// Timeout applied to each outbound call to the responder
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, StepwiseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StepwiseError> {
        let responder_url =
            lookup("LLM_SERVICE_URL").unwrap_or_else(|| DEFAULT_RESPONDER_URL.to_string());

        let request_timeout = match lookup("STEPWISE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    StepwiseError::Config(format!(
                        "STEPWISE_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            responder_url,
            request_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            responder_url: DEFAULT_RESPONDER_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

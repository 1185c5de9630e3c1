//! Error types and handling
//!
//! This module provides the error types used throughout the Stepwise
//! services. All errors implement the `StepwiseErrorExt` trait which
//! provides user-friendly hints and indicates whether errors are
//! recoverable.
//!
//! Error messages are safe to return to HTTP callers: they never include
//! upstream credentials or internal addresses beyond what the caller
//! already configured.

use thiserror::Error;

/// Trait for Stepwise error extensions
///
/// Provides additional context for errors, including user-friendly hints
/// and recoverability information.
pub trait StepwiseErrorExt {
    /// Returns a user-friendly hint for the error
    fn user_hint(&self) -> &str;

    /// Returns whether the error is recoverable
    ///
    /// Recoverable errors can be retried by the caller. Non-recoverable
    /// errors typically require a configuration or deployment fix.
    fn is_recoverable(&self) -> bool;
}

/// Main error type for the Stepwise services
///
/// # Error Categories
///
/// - **ServiceUnavailable**: the responder could not be reached, timed
///   out, or returned a non-success HTTP status
/// - **InvalidUpstreamResponse**: the responder answered 200 but with a
///   payload of the wrong shape for the stage that requested it
/// - **Config**: invalid or missing configuration
/// - **Io**: socket/bind failures during service startup
#[derive(Debug, Error)]
pub enum StepwiseError {
    // Upstream transport and status errors
    #[error("Responder unavailable: {0}")]
    ServiceUnavailable(String),

    // Upstream shape errors
    #[error("Invalid responder payload: {0}")]
    InvalidUpstreamResponse(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StepwiseErrorExt for StepwiseError {
    fn user_hint(&self) -> &str {
        match self {
            Self::ServiceUnavailable(_) => {
                "The language-model service is unreachable. Check that it is running"
            }
            Self::InvalidUpstreamResponse(_) => {
                "The language-model service returned an unexpected payload shape"
            }
            Self::Config(_) => "Check LLM_SERVICE_URL and related environment variables",
            Self::Io(_) => "Socket operation failed. Check the bind address",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // A bad config or bind address needs operator intervention
            Self::Config(_) | Self::Io(_) => false,

            // Upstream failures may clear up on retry
            Self::ServiceUnavailable(_) | Self::InvalidUpstreamResponse(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_detail() {
        let err = StepwiseError::ServiceUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = StepwiseError::InvalidUpstreamResponse("expected a list".to_string());
        assert!(err.to_string().contains("expected a list"));
    }

    #[test]
    fn test_recoverability() {
        assert!(StepwiseError::ServiceUnavailable("down".into()).is_recoverable());
        assert!(StepwiseError::InvalidUpstreamResponse("shape".into()).is_recoverable());
        assert!(!StepwiseError::Config("bad url".into()).is_recoverable());
    }

    #[test]
    fn test_user_hints_are_nonempty() {
        let errors = [
            StepwiseError::ServiceUnavailable("x".into()),
            StepwiseError::InvalidUpstreamResponse("x".into()),
            StepwiseError::Config("x".into()),
        ];
        for err in &errors {
            assert!(!err.user_hint().is_empty());
        }
    }
}

//! Stepwise SDK
//!
//! Shared library providing the wire types, error handling, and telemetry
//! used by both Stepwise services (the responder and the orchestrator).

/// Error types and handling
pub mod errors;

/// Telemetry and observability
pub mod telemetry;

/// Wire types for both HTTP surfaces
pub mod types;

// Re-export commonly used types
pub use errors::{StepwiseError, StepwiseErrorExt};
pub use types::{AnswerRecord, AskRequest, AskResponse, GenerateRequest, GenerateResponse, Reply};

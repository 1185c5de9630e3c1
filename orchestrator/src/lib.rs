//! Stepwise Orchestrator
//!
//! Coordination service implementing the decompose-then-solve pattern.
//! One endpoint, `POST /ask`, takes a natural-language question, asks the
//! responder to break it into ordered sub-questions, then asks the
//! responder to answer each sub-question in sequence, feeding every
//! solving prompt the accumulated text of the answers produced so far.
//!
//! # Endpoints
//!
//! - POST /ask - Decompose and solve a question
//! - GET /status - Get service status

/// Configuration
pub mod config;

/// Decompose-then-solve control flow
pub mod pipeline;

/// Responder capability trait and HTTP client
pub mod responder;

/// HTTP surface
pub mod server;

pub use config::Config;
pub use pipeline::Pipeline;
pub use responder::{HttpResponder, Responder};
pub use server::app;

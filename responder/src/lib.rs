//! Stepwise Responder
//!
//! A stub text-completion service. It simulates a language model by
//! matching known substrings in the incoming prompt and returning canned
//! replies: a fixed decomposition for the example question, fixed answers
//! for the three known sub-questions, and a fixed fallback sentence for
//! everything else.
//!
//! # Endpoints
//!
//! - POST /generate - Produce a canned completion for a prompt
//! - GET /status - Get service status

/// Canned-reply engine
pub mod engine;

/// HTTP surface
pub mod server;

pub use engine::{
    reply_to, CAPITAL_ANSWER, DAYTIME_ANSWER, DECOMPOSITION_STEPS, FALLBACK_ANSWER, TIME_ANSWER,
};
pub use server::app;

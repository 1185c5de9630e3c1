//! Wire types shared by the responder and orchestrator HTTP surfaces
//!
//! The responder speaks `POST /generate` with [`GenerateRequest`] /
//! [`GenerateResponse`]; the orchestrator speaks `POST /ask` with
//! [`AskRequest`] / [`AskResponse`]. [`Reply`] is untagged so the
//! `"response"` field stays a plain JSON string or array of strings on
//! the wire.

use serde::{Deserialize, Serialize};

/// Request body for the responder's `POST /generate` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

impl GenerateRequest {
    /// Create a new GenerateRequest
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Response body for the responder's `POST /generate` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: Reply,
}

/// A completion from the responder
///
/// Decomposition calls produce an ordered list of sub-question strings;
/// solving calls produce a single answer string. Serialized untagged:
/// `"some text"` or `["step 1", "step 2"]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Reply {
    /// A single answer (or fallback) sentence
    Text(String),

    /// An ordered sequence of sub-questions
    Steps(Vec<String>),
}

impl Reply {
    /// Create a text reply
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a decomposition reply
    pub fn steps(steps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Steps(steps.into_iter().map(Into::into).collect())
    }
}

/// Request body for the orchestrator's `POST /ask` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// One solved step: a sub-question paired with its answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
}

/// Response body for the orchestrator's `POST /ask` endpoint
///
/// Steps are in the order the sub-questions were produced and solved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub original_question: String,
    pub steps: Vec<AnswerRecord>,
}

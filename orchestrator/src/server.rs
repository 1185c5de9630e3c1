//! HTTP surface for the orchestrator
//!
//! Every pipeline failure — transport, upstream status, or payload shape
//! — collapses to a single 500 with a human-readable detail string. No
//! partial steps are ever returned.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use stepwise_sdk::{AskRequest, AskResponse, StepwiseErrorExt};

use crate::pipeline::Pipeline;

/// Orchestrator state shared across handlers
#[derive(Clone)]
struct ServerState {
    pipeline: Arc<Pipeline>,
}

/// Build the orchestrator router
pub fn app(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/ask", post(ask_handler))
        .route("/status", get(status_handler))
        .with_state(ServerState { pipeline })
}

/// Decompose-then-solve endpoint
async fn ask_handler(
    State(state): State<ServerState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.pipeline.ask(&payload.question).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("Failed to answer question: {} ({})", e, e.user_hint());
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": e.to_string() })),
            ))
        }
    }
}

/// Service status endpoint
async fn status_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

//! HTTP surface for the responder
//!
//! A single completion endpoint plus a status probe. The completion
//! endpoint always returns 200 with some payload; the canned-reply engine
//! has no error paths.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use stepwise_sdk::{GenerateRequest, GenerateResponse};

use crate::engine::reply_to;

/// Build the responder router
pub fn app() -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/status", get(status_handler))
}

/// Completion endpoint
async fn generate_handler(Json(payload): Json<GenerateRequest>) -> Json<GenerateResponse> {
    tracing::info!("Received prompt: {}", payload.prompt);

    Json(GenerateResponse {
        response: reply_to(&payload.prompt),
    })
}

/// Service status endpoint
async fn status_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

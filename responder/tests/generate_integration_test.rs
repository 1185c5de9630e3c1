//! Integration tests for the responder HTTP surface
//!
//! Serves the real router on an ephemeral localhost port and exercises it
//! with a plain HTTP client.

use serde_json::json;
use std::net::SocketAddr;

use stepwise_responder::{app, CAPITAL_ANSWER, DECOMPOSITION_STEPS, FALLBACK_ANSWER};

/// Spawn the responder app on 127.0.0.1:0 and return its address.
async fn spawn_responder() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app()).await.expect("serve responder");
    });

    addr
}

#[tokio::test]
async fn test_generate_decomposition_over_http() {
    let addr = spawn_responder().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("http://{}/generate", addr))
        .json(&json!({"prompt": "Decompose this question into simple steps: 'Florida?'"}))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    let steps = body["response"].as_array().expect("response is a list");
    let steps: Vec<&str> = steps.iter().filter_map(|v| v.as_str()).collect();
    assert_eq!(steps, DECOMPOSITION_STEPS);
}

#[tokio::test]
async fn test_generate_solving_and_fallback_over_http() {
    let addr = spawn_responder().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("http://{}/generate", addr))
        .json(&json!({"prompt": "what is the capital of florida?"}))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["response"], CAPITAL_ANSWER);

    let body: serde_json::Value = client
        .post(format!("http://{}/generate", addr))
        .json(&json!({"prompt": "who won the world cup?"}))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");
    assert_eq!(body["response"], FALLBACK_ANSWER);
}

#[tokio::test]
async fn test_status_endpoint() {
    let addr = spawn_responder().await;

    let body: serde_json::Value = reqwest::get(format!("http://{}/status", addr))
        .await
        .expect("request")
        .json()
        .await
        .expect("json body");

    assert_eq!(body["status"], "running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

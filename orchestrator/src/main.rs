// Stepwise Orchestrator
// Main entry point for the decompose-then-solve coordination service

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use stepwise_orchestrator::config::Config;
use stepwise_orchestrator::pipeline::Pipeline;
use stepwise_orchestrator::responder::{HttpResponder, Responder};
use stepwise_sdk::telemetry::init_telemetry;

/// Decompose-then-solve coordination service for the Stepwise demo
#[derive(Debug, Parser)]
#[command(name = "stepwise-orchestrator", version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Responder base URL (overrides LLM_SERVICE_URL)
    #[arg(long)]
    responder_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_telemetry();
    tracing::info!("Stepwise orchestrator v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if let Some(url) = cli.responder_url {
        config.responder_url = url;
    }
    tracing::info!("Using responder at {}", config.responder_url);

    let responder = Arc::new(HttpResponder::new(&config)?) as Arc<dyn Responder>;
    let pipeline = Arc::new(Pipeline::new(responder));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(
        "Orchestrator listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, stepwise_orchestrator::app(pipeline))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Orchestrator shutting down gracefully");
}

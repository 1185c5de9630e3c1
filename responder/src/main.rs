// Stepwise Responder
// Main entry point for the stub text-completion service

use std::net::SocketAddr;

use clap::Parser;
use stepwise_sdk::telemetry::init_telemetry;

/// Stub text-completion service for the Stepwise demo
#[derive(Debug, Parser)]
#[command(name = "stepwise-responder", version)]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_telemetry();
    tracing::info!("Stepwise responder v{}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!("Responder listening on http://{}", listener.local_addr()?);

    axum::serve(listener, stepwise_responder::app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("Responder shutting down gracefully");
}

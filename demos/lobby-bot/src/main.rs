//! Runnable lobby bot: a gateway listening for chat-platform adapters.
//!
//! Usage: `lobby-bot [bind-addr]` (default `0.0.0.0:8080`). Log level
//! via `RUST_LOG`, e.g. `RUST_LOG=partyup=debug`.

use partyup::GatewayServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let server = GatewayServer::builder().bind(&addr).build().await?;
    tracing::info!(%addr, "lobby bot up, waiting for adapters");

    server.run().await?;
    Ok(())
}

//! `GatewayServer` builder and accept loop.
//!
//! Ties the layers together: WebSocket transport → protocol codec →
//! room registry. The registry is constructed once here, owned by the
//! server state, and shared behind a single mutex — the only shared
//! mutable resource in the process.

use std::sync::Arc;

use partyup_protocol::JsonCodec;
use partyup_registry::RoomRegistry;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::GatewayError;
use crate::handler::handle_connection;

/// Shared state passed to each connection handler task.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks. The
/// registry mutex is the serialization point for all room transitions,
/// whichever adapter connection they arrive on.
pub(crate) struct GatewayState {
    pub(crate) registry: Mutex<RoomRegistry>,
    pub(crate) codec: JsonCodec,
}

/// Builder for configuring and starting a gateway server.
pub struct GatewayServerBuilder {
    bind_addr: String,
}

impl GatewayServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the listener and builds the server.
    pub async fn build(self) -> Result<GatewayServer, GatewayError> {
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .map_err(GatewayError::Bind)?;
        tracing::info!(addr = %self.bind_addr, "gateway listening");

        let state = Arc::new(GatewayState {
            registry: Mutex::new(RoomRegistry::new()),
            codec: JsonCodec,
        });

        Ok(GatewayServer { listener, state })
    }
}

impl Default for GatewayServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running lobby-bot gateway.
///
/// Call [`run()`](Self::run) to start accepting adapter connections.
pub struct GatewayServer {
    listener: TcpListener,
    state: Arc<GatewayState>,
}

impl GatewayServer {
    /// Creates a new builder.
    pub fn builder() -> GatewayServerBuilder {
        GatewayServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop.
    ///
    /// Each adapter connection gets its own task; all of them share the
    /// one registry. Runs until the process is terminated.
    pub async fn run(self) -> Result<(), GatewayError> {
        tracing::info!("gateway running");

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) =
                            handle_connection(stream, peer, state).await
                        {
                            tracing::debug!(
                                %peer,
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}

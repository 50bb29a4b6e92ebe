//! Per-connection handler: decode events, drive the registry, deliver
//! notices.
//!
//! Each adapter connection runs this loop in its own task:
//!   1. Receive a frame → decode a `GatewayEvent`
//!   2. Run the registry `handle` inside the mutex (the whole
//!      read-check-mutate sequence is one critical section)
//!   3. Render the outcome and send the notice AFTER the lock is
//!      dropped — delivery never blocks another sender's transition,
//!      and a send failure never unwinds committed state.

use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use partyup_protocol::{Codec, GatewayEvent};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;

use crate::GatewayError;
use crate::render::render;
use crate::server::GatewayState;

/// Handles a single adapter connection from accept to close.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    state: Arc<GatewayState>,
) -> Result<(), GatewayError> {
    let mut ws = tokio_tungstenite::accept_async(stream)
        .await
        .map_err(GatewayError::Handshake)?;
    tracing::info!(%peer, "adapter connected");

    while let Some(frame) = ws.next().await {
        let data: Vec<u8> = match frame {
            Ok(Message::Binary(data)) => data.into(),
            Ok(Message::Text(text)) => text.as_bytes().to_vec(),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue, // ping/pong/raw frame
            Err(e) => return Err(GatewayError::Receive(e)),
        };

        let event: GatewayEvent = match state.codec.decode(&data) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%peer, error = %e, "undecodable frame, skipping");
                continue;
            }
        };

        let GatewayEvent::Message {
            user_id,
            user_name,
            text,
        } = event;

        // Lock only for the state transition, drop before network I/O.
        let outcome = {
            let mut registry = state.registry.lock().await;
            registry.handle(&text, &user_id, &user_name)
        };

        if let Some(reply) = render(&outcome) {
            let bytes = state.codec.encode(&reply)?;
            ws.send(Message::Binary(bytes.into()))
                .await
                .map_err(GatewayError::Send)?;
        }
    }

    tracing::info!(%peer, "adapter disconnected");
    Ok(())
}

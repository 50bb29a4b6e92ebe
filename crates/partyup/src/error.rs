//! Error types for the gateway.

use partyup_protocol::ProtocolError;
use tokio_tungstenite::tungstenite;

/// Errors that can occur while running the gateway.
///
/// Registry operations never appear here: every inbound message
/// resolves to an `Outcome`, so only transport and serialization can
/// fail. A failure after a `handle` call never rolls back the registry
/// mutation — a lost notification is acceptable, a lost or duplicated
/// state transition is not.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Binding the listen address failed.
    #[error("bind failed: {0}")]
    Bind(std::io::Error),

    /// Accepting a TCP connection failed.
    #[error("accept failed: {0}")]
    Accept(std::io::Error),

    /// The WebSocket upgrade handshake failed.
    #[error("websocket handshake failed: {0}")]
    Handshake(tungstenite::Error),

    /// Sending a frame to the adapter failed.
    #[error("send failed: {0}")]
    Send(tungstenite::Error),

    /// Receiving a frame from the adapter failed.
    #[error("receive failed: {0}")]
    Receive(tungstenite::Error),

    /// Encoding or decoding a gateway message failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol_error() {
        let bad: Result<partyup_protocol::GatewayEvent, _> =
            partyup_protocol::Codec::decode(&partyup_protocol::JsonCodec, b"garbage");
        let err: GatewayError = bad.unwrap_err().into();
        assert!(matches!(err, GatewayError::Protocol(_)));
        assert!(err.to_string().contains("decode failed"));
    }

    #[test]
    fn test_bind_error_message() {
        let err = GatewayError::Bind(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert!(err.to_string().contains("bind failed"));
    }
}

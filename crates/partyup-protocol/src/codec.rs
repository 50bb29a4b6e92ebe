//! Codec trait and implementations for gateway messages.
//!
//! The gateway doesn't care how messages are serialized — it works
//! against the [`Codec`] trait. [`JsonCodec`] is the default (and so
//! far only) implementation; a binary codec could be added behind a
//! feature flag without touching the rest of the stack.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes values to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` because the codec is stored in long-lived
/// per-connection tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that speaks JSON via `serde_json`.
///
/// Human-readable, which is what chat-platform adapters want: frames
/// can be inspected in logs and devtools. Behind the default `json`
/// feature.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{GatewayEvent, UserId};

    #[test]
    fn test_json_codec_round_trip() {
        let codec = JsonCodec;
        let event = GatewayEvent::Message {
            user_id: UserId::new("u1"),
            user_name: "Alice".into(),
            text: "54321".into(),
        };

        let bytes = codec.encode(&event).unwrap();
        let decoded: GatewayEvent = codec.decode(&bytes).unwrap();
        assert_eq!(event, decoded);
    }

    #[test]
    fn test_json_codec_decode_garbage_fails() {
        let codec = JsonCodec;
        let result: Result<GatewayEvent, _> = codec.decode(b"not json at all");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}

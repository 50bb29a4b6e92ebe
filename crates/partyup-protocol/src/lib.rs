//! Boundary types for the Partyup gateway.
//!
//! This crate defines the "language" spoken between a chat-platform
//! adapter and the gateway:
//!
//! - **Types** ([`GatewayEvent`], [`GatewayReply`], [`UserId`],
//!   [`RoomCode`], [`Audience`]) — the message structures that travel
//!   on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages
//!   are converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! The protocol layer sits between transport (raw bytes) and the room
//! registry. It doesn't know about connections or rooms — it only knows
//! how to name users, parse room codes, and serialize messages.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{Audience, GatewayEvent, GatewayReply, RoomCode, UserId};

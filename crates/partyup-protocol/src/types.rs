//! Message and identity types for the gateway boundary.
//!
//! Everything a platform adapter sends to the gateway, and everything
//! the gateway sends back, is defined here. The adapter owns message
//! receipt and decoding on its platform; the gateway owns room
//! semantics. These types are the contract between the two.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A stable, unique identifier for a chat user.
///
/// Opaque to the gateway — whatever the platform uses (numeric id,
/// UUID, handle) is carried through unchanged. Display names are NOT
/// identity: they travel separately and are used only in notice text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A room code: exactly five ASCII decimal digits.
///
/// Room codes are the only message text the bot reacts to. A value of
/// this type is always well-formed — the only way to obtain one is
/// [`RoomCode::parse`], which applies the full-match filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Number of digits in a room code.
    pub const LEN: usize = 5;

    /// Parses a raw message body into a room code.
    ///
    /// Leading/trailing whitespace is stripped, then the remainder must
    /// be exactly five decimal digits — the entire string, nothing
    /// else. Partial matches, embedded spaces, or extra characters
    /// yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.len() == Self::LEN && text.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(text.to_owned()))
        } else {
            None
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Audience — who a notice is addressed to
// ---------------------------------------------------------------------------

/// Who should see an outbound notice.
///
/// `Everyone` is the broadcast/mention marker: the adapter is expected
/// to deliver the notice to the whole channel with an @everyone-style
/// mention. `Sender` addresses only the user whose message triggered
/// the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    /// Broadcast to the whole channel, with a mention marker.
    Everyone,
    /// Deliver only to the triggering user.
    Sender,
}

// ---------------------------------------------------------------------------
// GatewayEvent — inbound
// ---------------------------------------------------------------------------

/// An event delivered by the platform adapter to the gateway.
///
/// `#[serde(tag = "type")]` produces internally tagged JSON:
/// `{ "type": "Message", "user_id": "u1", "user_name": "Alice", "text": "54321" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GatewayEvent {
    /// A chat message: body text plus sender identity.
    Message {
        /// Stable sender identifier.
        user_id: UserId,
        /// Human-readable name, used only in notice text.
        user_name: String,
        /// Raw message body. The gateway trims and matches it; the
        /// adapter does not need to pre-process it.
        text: String,
    },
}

// ---------------------------------------------------------------------------
// GatewayReply — outbound
// ---------------------------------------------------------------------------

/// A reply from the gateway for the adapter to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GatewayReply {
    /// User-facing notice text with its target audience.
    Notice {
        /// Who the adapter should address.
        audience: Audience,
        /// Rendered notice body.
        text: String,
    },
}

// =========================================================================
// Tests
// =========================================================================

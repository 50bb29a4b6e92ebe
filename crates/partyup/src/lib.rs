//! # Partyup
//!
//! A lobby bot for ephemeral multiplayer game rooms. Users create and
//! join rooms by sending a bare 5-digit code in chat; the fourth member
//! fills the room and the game starts.
//!
//! This crate is the MessageGateway: it accepts chat-platform adapters
//! over WebSocket, feeds their message events through the
//! [`RoomRegistry`](partyup_registry::RoomRegistry), and sends back the
//! rendered notices. Room semantics live entirely in
//! `partyup-registry`; text lives entirely in [`render`].
//!
//! ```rust,no_run
//! use partyup::GatewayServer;
//!
//! # async fn run() -> Result<(), partyup::GatewayError> {
//! let server = GatewayServer::builder()
//!     .bind("0.0.0.0:8080")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod render;
mod server;

pub use error::GatewayError;
pub use render::render;
pub use server::{GatewayServer, GatewayServerBuilder};

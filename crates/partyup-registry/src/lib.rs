//! Room lifecycle state machine for Partyup.
//!
//! An in-memory table of active game rooms keyed by 5-digit codes. One
//! operation matters: [`RoomRegistry::handle`] takes a raw chat message
//! plus sender identity and applies at most one state transition —
//! create a room, admit a member, or tear a filled room down — returning
//! the [`Outcome`] that drives notification rendering.
//!
//! The registry is a plain owned value with no interior locking. The
//! hosting gateway serializes calls (one mutex around the whole
//! `handle`), so each call is one atomic unit and no partially applied
//! transition is ever observable.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — the table and its `handle` operation
//! - [`Room`] — code plus ordered members, capacity 4
//! - [`Outcome`] — the tagged result of one `handle` call

mod outcome;
mod registry;
mod room;

pub use outcome::Outcome;
pub use registry::RoomRegistry;
pub use room::{ROOM_CAPACITY, Room};

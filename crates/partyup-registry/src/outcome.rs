//! The result of one `handle` call.

use partyup_protocol::RoomCode;

/// The tagged result of one [`RoomRegistry::handle`] invocation.
///
/// Every possible input resolves to one of these variants — there is no
/// error path. The variants carry everything notification rendering
/// needs, so delivery can happen after the registry lock is released.
///
/// [`RoomRegistry::handle`]: crate::RoomRegistry::handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was not a room-code command. Nothing happened and
    /// nothing should be sent.
    Ignored,

    /// The sender is already in a room (any room, including the one
    /// whose code they sent). Nothing happened; warn the sender.
    Rejected,

    /// A new room was created with the sender as its only member.
    Created {
        /// Code of the new room.
        code: RoomCode,
        /// Display name of the creator, for the broadcast text.
        creator_name: String,
    },

    /// The room exists but could not admit the sender — it was full,
    /// or the sender was somehow already a member.
    JoinFailed {
        /// Code of the room that refused the join.
        code: RoomCode,
    },

    /// The sender joined an existing room that still has free slots.
    Joined {
        /// Code of the joined room.
        code: RoomCode,
        /// Display name of the joiner, for the broadcast text.
        user_name: String,
        /// Member count after the join.
        count: usize,
    },

    /// The sender's join brought the room to capacity. The room has
    /// been removed from the registry; the game starts.
    RoomFilled {
        /// Code of the room that filled (and is now gone).
        code: RoomCode,
        /// Display name of the final joiner, for the broadcast text.
        user_name: String,
        /// Always the room capacity.
        count: usize,
    },
}

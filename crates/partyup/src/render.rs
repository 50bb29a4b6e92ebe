//! Notice rendering: the pure mapping from registry outcomes to
//! user-facing text.
//!
//! The registry knows nothing about presentation; this function knows
//! nothing about state. It is keyed entirely off the [`Outcome`]
//! variant and its fields.

use partyup_protocol::{Audience, GatewayReply};
use partyup_registry::{Outcome, ROOM_CAPACITY};

/// Renders an outcome into the notice to deliver, if any.
///
/// `Ignored` renders to `None` — ordinary chatter gets no reply.
/// Broadcast notices (room created, joined, filled) are addressed to
/// [`Audience::Everyone`], the adapter's cue to attach a mention
/// marker; warnings go back to the sender alone.
pub fn render(outcome: &Outcome) -> Option<GatewayReply> {
    let (audience, text) = match outcome {
        Outcome::Ignored => return None,

        Outcome::Rejected => (
            Audience::Sender,
            "You are already in a room.".to_owned(),
        ),

        Outcome::Created { code, creator_name } => (
            Audience::Everyone,
            format!("Room {code} created! {creator_name} is waiting for others to join."),
        ),

        Outcome::JoinFailed { code } => (
            Audience::Sender,
            format!("Could not join room {code}: it is full or you already joined."),
        ),

        Outcome::Joined {
            code,
            user_name,
            count,
        } => (
            Audience::Everyone,
            format!("{user_name} joined room {code} ({count}/{ROOM_CAPACITY})."),
        ),

        Outcome::RoomFilled {
            code,
            user_name,
            count,
        } => (
            Audience::Everyone,
            format!(
                "{user_name} joined room {code} ({count}/{ROOM_CAPACITY}).\n\
                 Room is full, game starting!"
            ),
        ),
    };

    Some(GatewayReply::Notice { audience, text })
}

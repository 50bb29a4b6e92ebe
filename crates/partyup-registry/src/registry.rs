//! The room registry: the table of active rooms and its one operation.

use std::collections::HashMap;

use partyup_protocol::{RoomCode, UserId};

use crate::Outcome;
use crate::room::{ROOM_CAPACITY, Room};

/// What `handle` decided to do, computed from reads only.
///
/// The decision is settled before any mutation, so exactly one map
/// operation (insert, append, or remove) is applied per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Create,
    Refuse,
    Admit { count: usize },
}

/// The in-memory table of active rooms, keyed by room code.
///
/// Invariant: a user id appears in at most one room's members across
/// the whole table. Construct one at process start and share it behind
/// a single mutex — `handle` takes `&mut self` and each call must be
/// one atomic unit relative to other callers.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, Room>,
}

impl RoomRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Processes one inbound chat message.
    ///
    /// The check order is load-bearing:
    ///
    /// 1. `raw_text` is trimmed and must be exactly five decimal
    ///    digits, else [`Outcome::Ignored`] — no room logic runs at
    ///    all for ordinary chatter.
    /// 2. A sender who is already in any room gets
    ///    [`Outcome::Rejected`], even when the code they sent is their
    ///    own room's.
    /// 3. An unknown code creates a room with the sender as creator; a
    ///    known code admits them unless it is full or they are already
    ///    a member. A join that reaches capacity tears the room down
    ///    on the spot — a full room is never observable.
    ///
    /// Steps 1–2 and the decision in step 3 are pure reads; at most one
    /// mutation to the table follows.
    pub fn handle(
        &mut self,
        raw_text: &str,
        sender_id: &UserId,
        sender_name: &str,
    ) -> Outcome {
        let Some(code) = RoomCode::parse(raw_text) else {
            return Outcome::Ignored;
        };

        if self.member_room(sender_id).is_some() {
            tracing::debug!(user = %sender_id, %code, "sender already in a room");
            return Outcome::Rejected;
        }

        let decision = match self.rooms.get(&code) {
            None => Decision::Create,
            Some(room) if !room.can_admit(sender_id) => Decision::Refuse,
            Some(room) => Decision::Admit {
                count: room.member_count() + 1,
            },
        };

        match decision {
            Decision::Create => {
                self.rooms
                    .insert(code.clone(), Room::new(code.clone(), sender_id.clone()));
                tracing::info!(%code, creator = %sender_id, "room created");
                Outcome::Created {
                    code,
                    creator_name: sender_name.to_owned(),
                }
            }
            Decision::Refuse => Outcome::JoinFailed { code },
            Decision::Admit { count } if count == ROOM_CAPACITY => {
                self.rooms.remove(&code);
                tracing::info!(%code, user = %sender_id, "room filled, torn down");
                Outcome::RoomFilled {
                    code,
                    user_name: sender_name.to_owned(),
                    count,
                }
            }
            Decision::Admit { count } => {
                if let Some(room) = self.rooms.get_mut(&code) {
                    room.admit(sender_id.clone());
                }
                tracing::info!(%code, user = %sender_id, members = count, "user joined");
                Outcome::Joined {
                    code,
                    user_name: sender_name.to_owned(),
                    count,
                }
            }
        }
    }

    /// Returns the code of the room the user is currently in, if any.
    pub fn member_room(&self, user: &UserId) -> Option<&RoomCode> {
        self.rooms
            .values()
            .find(|room| room.contains(user))
            .map(Room::code)
    }

    /// Returns the room with the given code, if it is active.
    pub fn room(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// Returns the number of active rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(s: &str) -> UserId {
        UserId::new(s)
    }

    #[test]
    fn test_non_command_text_is_ignored() {
        let mut reg = RoomRegistry::new();
        for text in ["hello", "1234", "123456", "12a45", "join 54321", ""] {
            assert_eq!(reg.handle(text, &uid("A"), "A"), Outcome::Ignored);
        }
        assert_eq!(reg.room_count(), 0);
    }

    #[test]
    fn test_whitespace_around_code_is_trimmed() {
        let mut reg = RoomRegistry::new();
        let outcome = reg.handle("  54321 \n", &uid("A"), "Alice");
        assert!(matches!(outcome, Outcome::Created { .. }));
    }

    #[test]
    fn test_fresh_code_creates_room_with_creator() {
        let mut reg = RoomRegistry::new();
        let outcome = reg.handle("54321", &uid("A"), "Alice");

        let code = RoomCode::parse("54321").unwrap();
        assert_eq!(
            outcome,
            Outcome::Created {
                code: code.clone(),
                creator_name: "Alice".into(),
            }
        );
        let room = reg.room(&code).expect("room exists");
        assert_eq!(room.members(), &[uid("A")]);
    }

    #[test]
    fn test_resending_own_room_code_is_rejected_not_join_failed() {
        let mut reg = RoomRegistry::new();
        reg.handle("54321", &uid("A"), "Alice");

        // Cross-room check fires before the per-room duplicate check.
        assert_eq!(reg.handle("54321", &uid("A"), "Alice"), Outcome::Rejected);
        assert_eq!(reg.room_count(), 1);
    }

    #[test]
    fn test_member_cannot_create_or_join_elsewhere() {
        let mut reg = RoomRegistry::new();
        reg.handle("54321", &uid("A"), "Alice");

        assert_eq!(reg.handle("99999", &uid("A"), "Alice"), Outcome::Rejected);
        assert_eq!(reg.room_count(), 1);
        let room = reg.room(&RoomCode::parse("54321").unwrap()).unwrap();
        assert_eq!(room.member_count(), 1);
    }

    #[test]
    fn test_join_reports_running_count() {
        let mut reg = RoomRegistry::new();
        reg.handle("54321", &uid("A"), "Alice");

        let code = RoomCode::parse("54321").unwrap();
        assert_eq!(
            reg.handle("54321", &uid("B"), "Bob"),
            Outcome::Joined {
                code: code.clone(),
                user_name: "Bob".into(),
                count: 2,
            }
        );
        assert_eq!(
            reg.handle("54321", &uid("C"), "Cara"),
            Outcome::Joined {
                code,
                user_name: "Cara".into(),
                count: 3,
            }
        );
    }

    #[test]
    fn test_fourth_member_fills_and_tears_down() {
        let mut reg = RoomRegistry::new();
        reg.handle("54321", &uid("A"), "Alice");
        reg.handle("54321", &uid("B"), "Bob");
        reg.handle("54321", &uid("C"), "Cara");

        let code = RoomCode::parse("54321").unwrap();
        assert_eq!(
            reg.handle("54321", &uid("D"), "Dan"),
            Outcome::RoomFilled {
                code: code.clone(),
                user_name: "Dan".into(),
                count: 4,
            }
        );
        // Torn down, not lingering in a full state.
        assert!(reg.room(&code).is_none());
        assert_eq!(reg.room_count(), 0);
    }

    #[test]
    fn test_code_is_reusable_after_teardown() {
        let mut reg = RoomRegistry::new();
        for (id, name) in [("A", "Alice"), ("B", "Bob"), ("C", "Cara"), ("D", "Dan")] {
            reg.handle("54321", &uid(id), name);
        }

        // A fifth sender starts a fresh room, not a join of the old one.
        let outcome = reg.handle("54321", &uid("E"), "Eve");
        assert_eq!(
            outcome,
            Outcome::Created {
                code: RoomCode::parse("54321").unwrap(),
                creator_name: "Eve".into(),
            }
        );
    }

    #[test]
    fn test_member_room_lookup() {
        let mut reg = RoomRegistry::new();
        reg.handle("54321", &uid("A"), "Alice");
        reg.handle("11111", &uid("B"), "Bob");

        assert_eq!(
            reg.member_room(&uid("A")),
            Some(&RoomCode::parse("54321").unwrap())
        );
        assert_eq!(
            reg.member_room(&uid("B")),
            Some(&RoomCode::parse("11111").unwrap())
        );
        assert_eq!(reg.member_room(&uid("Z")), None);
    }
}

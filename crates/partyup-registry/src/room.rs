//! A single game room: its code and its members in join order.

use partyup_protocol::{RoomCode, UserId};

/// A room starts with one member (the creator) and is torn down by the
/// registry the instant it reaches this many.
pub const ROOM_CAPACITY: usize = 4;

/// An active game room.
///
/// Members are kept in join order and never duplicated. A `Room` only
/// ever lives inside a [`RoomRegistry`](crate::RoomRegistry); nothing
/// else holds a reference to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    code: RoomCode,
    members: Vec<UserId>,
}

impl Room {
    /// Creates a room with the creator as its sole member.
    pub fn new(code: RoomCode, creator: UserId) -> Self {
        Self {
            code,
            members: vec![creator],
        }
    }

    /// Returns the room's code.
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// Returns the members in join order.
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the current member count.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the user is a member of this room.
    pub fn contains(&self, user: &UserId) -> bool {
        self.members.iter().any(|m| m == user)
    }

    /// Returns `true` if the room has no free slot.
    pub fn is_full(&self) -> bool {
        self.members.len() >= ROOM_CAPACITY
    }

    /// Returns `true` if the user could be admitted right now.
    pub fn can_admit(&self, user: &UserId) -> bool {
        !self.is_full() && !self.contains(user)
    }

    /// Admits a user, appending them to the member list.
    ///
    /// Refuses duplicates and admissions past capacity, returning
    /// `false`. The registry already rules both out before calling
    /// this; the re-check here is enforced independently as a safety
    /// net.
    pub fn admit(&mut self, user: UserId) -> bool {
        if self.contains(&user) || self.is_full() {
            return false;
        }
        self.members.push(user);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> RoomCode {
        RoomCode::parse(s).expect("test code is valid")
    }

    #[test]
    fn test_new_room_has_creator_as_sole_member() {
        let room = Room::new(code("54321"), UserId::new("A"));
        assert_eq!(room.members(), &[UserId::new("A")]);
        assert_eq!(room.member_count(), 1);
        assert!(!room.is_full());
    }

    #[test]
    fn test_admit_preserves_join_order() {
        let mut room = Room::new(code("54321"), UserId::new("A"));
        assert!(room.admit(UserId::new("B")));
        assert!(room.admit(UserId::new("C")));
        assert_eq!(
            room.members(),
            &[UserId::new("A"), UserId::new("B"), UserId::new("C")]
        );
    }

    #[test]
    fn test_admit_refuses_duplicate() {
        let mut room = Room::new(code("54321"), UserId::new("A"));
        assert!(!room.admit(UserId::new("A")));
        assert_eq!(room.member_count(), 1);
    }

    #[test]
    fn test_admit_refuses_past_capacity() {
        let mut room = Room::new(code("54321"), UserId::new("A"));
        assert!(room.admit(UserId::new("B")));
        assert!(room.admit(UserId::new("C")));
        assert!(room.admit(UserId::new("D")));
        assert!(room.is_full());
        assert!(!room.admit(UserId::new("E")));
        assert_eq!(room.member_count(), ROOM_CAPACITY);
    }

    #[test]
    fn test_can_admit_mirrors_admit() {
        let mut room = Room::new(code("54321"), UserId::new("A"));
        assert!(room.can_admit(&UserId::new("B")));
        assert!(!room.can_admit(&UserId::new("A")));
        room.admit(UserId::new("B"));
        room.admit(UserId::new("C"));
        room.admit(UserId::new("D"));
        assert!(!room.can_admit(&UserId::new("E")));
    }
}

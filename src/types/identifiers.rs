//! Room identifier type for the hotel booking engine
//!
//! Room numbers encode their position in the hotel directly: the hundreds
//! digit(s) give the floor and the last two digits give the room's position
//! on that floor. Room 101 is the first room on floor 1, room 1007 is the
//! seventh room on floor 10.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a single hotel room, encoded as `floor * 100 + position`.
///
/// Positions start at 1 and never reach 100, so identifiers are dense per
/// floor and globally unique across floors. The identifier carries no
/// knowledge of which rooms actually exist; layout membership is checked by
/// [`HotelLayout::contains`](crate::types::HotelLayout::contains).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(u16);

impl RoomId {
    /// Create a room identifier from a raw room number (e.g. `101`, `1007`).
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    /// Create a room identifier from a floor and a position on that floor.
    pub fn from_parts(floor: u8, position: u8) -> Self {
        Self(u16::from(floor) * 100 + u16::from(position))
    }

    /// The raw room number.
    pub fn number(self) -> u16 {
        self.0
    }

    /// The floor this room is on.
    pub fn floor(self) -> u8 {
        (self.0 / 100) as u8
    }

    /// The room's position on its floor (1-based).
    pub fn position(self) -> u8 {
        (self.0 % 100) as u8
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u16 =
            s.trim().parse().map_err(|_| format!("Invalid room number: {}", s))?;
        let id = RoomId::new(number);
        if id.floor() == 0 || id.position() == 0 {
            return Err(format!("Invalid room number: {}", s));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_decoding() {
        let room = RoomId::new(101);
        assert_eq!(room.floor(), 1);
        assert_eq!(room.position(), 1);

        let room = RoomId::new(1007);
        assert_eq!(room.floor(), 10);
        assert_eq!(room.position(), 7);

        let room = RoomId::new(910);
        assert_eq!(room.floor(), 9);
        assert_eq!(room.position(), 10);
    }

    #[test]
    fn test_room_id_from_parts() {
        assert_eq!(RoomId::from_parts(1, 1), RoomId::new(101));
        assert_eq!(RoomId::from_parts(10, 7), RoomId::new(1007));
        assert_eq!(RoomId::from_parts(5, 10), RoomId::new(510));
    }

    #[test]
    fn test_room_id_ordering_is_floor_major() {
        let mut rooms = vec![RoomId::new(201), RoomId::new(110), RoomId::new(102)];
        rooms.sort();
        assert_eq!(rooms, vec![RoomId::new(102), RoomId::new(110), RoomId::new(201)]);
    }

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::new(101).to_string(), "101");
        assert_eq!(RoomId::new(1007).to_string(), "1007");
    }

    #[test]
    fn test_room_id_parsing() {
        assert_eq!("101".parse::<RoomId>(), Ok(RoomId::new(101)));
        assert_eq!(" 205 ".parse::<RoomId>(), Ok(RoomId::new(205)));
        assert!("abc".parse::<RoomId>().is_err());
        // Floor or position of zero can never name a real room
        assert!("100".parse::<RoomId>().is_err());
        assert!("7".parse::<RoomId>().is_err());
    }

    #[test]
    fn test_room_id_serialization() {
        let room = RoomId::new(305);
        let json = serde_json::to_string(&room).unwrap();
        assert_eq!(json, "305");

        let parsed: RoomId = serde_json::from_str("305").unwrap();
        assert_eq!(parsed, room);
    }
}

//! Travel-time metric between rooms
//!
//! Walking between rooms costs 2 minutes per floor crossed and 1 minute per
//! room walked past. Candidate room sets are scored by the distance between
//! their extremities only; intermediate rooms add no cost of their own.

use crate::types::RoomId;

/// Minutes of travel per floor of vertical distance
pub const MINUTES_PER_FLOOR: u32 = 2;

/// Minutes of travel per room of horizontal distance
pub const MINUTES_PER_ROOM: u32 = 1;

/// Travel time in minutes between two rooms.
///
/// Symmetric, and zero when both arguments name the same room.
pub fn travel_time(a: RoomId, b: RoomId) -> u32 {
    let vertical = u32::from(a.floor().abs_diff(b.floor())) * MINUTES_PER_FLOOR;
    let horizontal = u32::from(a.position().abs_diff(b.position())) * MINUTES_PER_ROOM;
    vertical + horizontal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_room_costs_nothing() {
        assert_eq!(travel_time(RoomId::new(101), RoomId::new(101)), 0);
    }

    #[test]
    fn test_horizontal_travel() {
        assert_eq!(travel_time(RoomId::new(101), RoomId::new(104)), 3);
    }

    #[test]
    fn test_vertical_travel() {
        assert_eq!(travel_time(RoomId::new(101), RoomId::new(401)), 6);
    }

    #[test]
    fn test_combined_travel() {
        // 2 floors up, 4 rooms across
        assert_eq!(travel_time(RoomId::new(101), RoomId::new(305)), 8);
        // The concrete scenario from the booking contract
        assert_eq!(travel_time(RoomId::new(101), RoomId::new(205)), 6);
    }

    #[test]
    fn test_travel_time_is_symmetric() {
        let pairs = [
            (RoomId::new(101), RoomId::new(1007)),
            (RoomId::new(203), RoomId::new(207)),
            (RoomId::new(910), RoomId::new(101)),
        ];
        for (a, b) in pairs {
            assert_eq!(travel_time(a, b), travel_time(b, a));
        }
    }
}

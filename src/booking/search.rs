//! Room search strategies
//!
//! Both strategies slide a fixed-length window over an ordered free-room
//! list and score each window by the travel time between its first and last
//! room. Comparison is strictly less-than, so on equal cost the first
//! window found wins; combined with floor-major iteration this makes the
//! tie-breaking order part of the contract: lower floors first, then lower
//! starting positions.

use crate::booking::travel::travel_time;
use crate::facility::RoomInventory;
use crate::types::RoomId;
use tracing::debug;

/// An ordered set of rooms chosen by a search, with its travel cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSelection {
    /// Chosen rooms, ascending by (floor, position)
    pub rooms: Vec<RoomId>,
    /// Travel time between the first and last room of the set
    pub travel_time: u32,
}

/// Find the cheapest run of `count` free rooms confined to one floor.
///
/// Every floor with at least `count` free rooms contributes all contiguous
/// windows of its free list. Returns `None` when no floor qualifies.
pub fn best_single_floor(inventory: &RoomInventory, count: usize) -> Option<RoomSelection> {
    if count == 0 {
        return None;
    }

    let mut best: Option<RoomSelection> = None;
    for floor in inventory.layout().floors() {
        let free = inventory.free_rooms_on_floor(floor);
        if free.len() < count {
            continue;
        }
        scan_windows(&free, count, &mut best);
    }

    if let Some(selection) = &best {
        debug!(
            "Single-floor search selected rooms {:?} with travel time {}",
            selection.rooms, selection.travel_time
        );
    }
    best
}

/// Find the cheapest run of `count` free rooms across the whole hotel.
///
/// The free lists of all floors are concatenated in floor-major order and
/// windows may span floor boundaries. Non-contiguous combinations are never
/// considered. Returns `None` when fewer than `count` rooms are free in
/// total.
pub fn best_multi_floor(inventory: &RoomInventory, count: usize) -> Option<RoomSelection> {
    if count == 0 {
        return None;
    }

    let free = inventory.all_free_rooms();
    if free.len() < count {
        return None;
    }

    let mut best: Option<RoomSelection> = None;
    scan_windows(&free, count, &mut best);

    if let Some(selection) = &best {
        debug!(
            "Multi-floor search selected rooms {:?} with travel time {}",
            selection.rooms, selection.travel_time
        );
    }
    best
}

/// Slide a window of length `count` over `free`, keeping the cheapest
/// window seen so far. Strict `<` preserves the first-found tie-break.
fn scan_windows(free: &[RoomId], count: usize, best: &mut Option<RoomSelection>) {
    for window in free.windows(count) {
        let cost = travel_time(window[0], window[count - 1]);
        let improves = match best {
            Some(current) => cost < current.travel_time,
            None => true,
        };
        if improves {
            *best = Some(RoomSelection { rooms: window.to_vec(), travel_time: cost });
        }
    }
}

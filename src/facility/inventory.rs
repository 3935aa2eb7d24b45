//! Room inventory: the single source of truth for availability
//!
//! The inventory stores occupancy as a dense two-dimensional array indexed
//! by (floor, position). The key set is fixed by the layout at construction
//! time and never grows or shrinks; only the free/occupied flags change.
//! Iteration helpers yield rooms in floor-major, position-ascending order,
//! which is the tie-breaking order the search strategies rely on.

use crate::types::{HotelLayout, RoomId};
use rand::Rng;
use std::collections::BTreeMap;

/// Mutable occupancy map over a fixed hotel layout.
///
/// Every room starts free. The inventory itself performs no policy checks;
/// the booking engine validates operations before flipping any flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInventory {
    layout: HotelLayout,
    /// Free flags, indexed by `[floor - 1][position - 1]`; `true` = free
    free: Vec<Vec<bool>>,
}

impl RoomInventory {
    /// Create an inventory with every room in the layout free.
    pub fn new(layout: HotelLayout) -> Self {
        let free = layout
            .floors()
            .map(|floor| {
                let count = layout.rooms_on_floor(floor).unwrap_or(0);
                vec![true; usize::from(count)]
            })
            .collect();
        Self { layout, free }
    }

    /// The fixed topology this inventory was built over.
    pub fn layout(&self) -> &HotelLayout {
        &self.layout
    }

    /// Whether the identifier names a room that exists in this inventory.
    pub fn contains(&self, room: RoomId) -> bool {
        self.layout.contains(room)
    }

    /// Whether the room is currently free, or `None` for an unknown room.
    pub fn is_free(&self, room: RoomId) -> Option<bool> {
        if !self.layout.contains(room) {
            return None;
        }
        Some(self.free[usize::from(room.floor()) - 1][usize::from(room.position()) - 1])
    }

    /// Flip a room's free flag. Returns `false` for an unknown room.
    pub fn set_free(&mut self, room: RoomId, free: bool) -> bool {
        if !self.layout.contains(room) {
            return false;
        }
        self.free[usize::from(room.floor()) - 1][usize::from(room.position()) - 1] = free;
        true
    }

    /// Free rooms on one floor, ascending by position.
    pub fn free_rooms_on_floor(&self, floor: u8) -> Vec<RoomId> {
        let Some(flags) = self.free.get(usize::from(floor).wrapping_sub(1)) else {
            return Vec::new();
        };
        flags
            .iter()
            .enumerate()
            .filter(|(_, &free)| free)
            .map(|(index, _)| RoomId::from_parts(floor, (index + 1) as u8))
            .collect()
    }

    /// All free rooms in floor-major, position-ascending order.
    pub fn all_free_rooms(&self) -> Vec<RoomId> {
        self.layout.floors().flat_map(|floor| self.free_rooms_on_floor(floor)).collect()
    }

    /// Number of free rooms across the whole hotel.
    pub fn free_count(&self) -> usize {
        self.free.iter().map(|flags| flags.iter().filter(|&&free| free).count()).sum()
    }

    /// Total number of rooms (free or occupied).
    pub fn room_count(&self) -> usize {
        self.layout.room_count()
    }

    /// Full availability snapshot keyed by room number, floor-major order.
    pub fn snapshot(&self) -> BTreeMap<RoomId, bool> {
        let mut map = BTreeMap::new();
        for (floor_index, flags) in self.free.iter().enumerate() {
            for (position_index, &free) in flags.iter().enumerate() {
                let room =
                    RoomId::from_parts((floor_index + 1) as u8, (position_index + 1) as u8);
                map.insert(room, free);
            }
        }
        map
    }

    /// Restore every room to free, equivalent to re-initialization.
    pub fn reset(&mut self) {
        for flags in &mut self.free {
            for slot in flags.iter_mut() {
                *slot = true;
            }
        }
    }

    /// Assign each room free or occupied independently with equal
    /// probability, drawing from the supplied random source.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for flags in &mut self.free {
            for slot in flags.iter_mut() {
                *slot = rng.gen::<bool>();
            }
        }
    }
}

//! Occupancy statistics derived from the room inventory

use crate::facility::inventory::RoomInventory;
use serde::{Deserialize, Serialize};

/// Point-in-time occupancy counts for the whole hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStats {
    /// Total number of rooms in the hotel
    pub total_rooms: usize,
    /// Rooms currently free
    pub free_rooms: usize,
    /// Rooms currently occupied
    pub occupied_rooms: usize,
    /// Free rooms per floor, indexed by floor - 1
    pub free_rooms_per_floor: Vec<usize>,
}

impl OccupancyStats {
    /// Compute statistics from an inventory snapshot.
    pub fn from_inventory(inventory: &RoomInventory) -> Self {
        let free_rooms_per_floor: Vec<usize> = inventory
            .layout()
            .floors()
            .map(|floor| inventory.free_rooms_on_floor(floor).len())
            .collect();
        let free_rooms = free_rooms_per_floor.iter().sum();
        let total_rooms = inventory.room_count();

        Self {
            total_rooms,
            free_rooms,
            occupied_rooms: total_rooms - free_rooms,
            free_rooms_per_floor,
        }
    }

    /// Percentage of rooms currently occupied (0.0 - 100.0).
    pub fn occupancy_percentage(&self) -> f64 {
        if self.total_rooms == 0 {
            return 0.0;
        }
        (self.occupied_rooms as f64 / self.total_rooms as f64) * 100.0
    }
}

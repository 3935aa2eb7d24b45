//! Hotel facility: fixed topology and mutable room occupancy
//!
//! This module owns the inventory — the single source of truth for room
//! availability — together with derived occupancy statistics. The topology
//! itself ([`HotelLayout`](crate::types::HotelLayout)) lives with the core
//! types; the inventory binds occupancy flags to it.
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_booking_engine::facility::{OccupancyStats, RoomInventory};
//! use hotel_booking_engine::types::{HotelLayout, RoomId};
//!
//! let mut inventory = RoomInventory::new(HotelLayout::default());
//! inventory.set_free(RoomId::new(101), false);
//!
//! let stats = OccupancyStats::from_inventory(&inventory);
//! assert_eq!(stats.occupied_rooms, 1);
//! ```

pub mod inventory;
pub mod stats;

// Re-export all public types for convenience
pub use inventory::RoomInventory;
pub use stats::OccupancyStats;

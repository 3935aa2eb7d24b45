//! The booking engine: search-then-commit operations over the inventory
//!
//! The engine owns the inventory and applies every externally visible
//! operation to it: automatic booking, manual booking, cancellation,
//! randomization and reset. Validation always completes before the first
//! flag flips, so a failed operation leaves the inventory untouched.

use crate::booking::error::{BookingError, BookingResult};
use crate::booking::receipt::BookingReceipt;
use crate::booking::search::{best_multi_floor, best_single_floor, RoomSelection};
use crate::booking::travel::travel_time;
use crate::facility::{OccupancyStats, RoomInventory};
use crate::types::config::booking_policy::{MAX_ROOMS_PER_BOOKING, MIN_ROOMS_PER_BOOKING};
use crate::types::{BookingType, HotelLayout, RoomId};
use rand::rngs::StdRng;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument, warn};

/// Room allocation engine over a fixed hotel layout.
///
/// Automatic bookings run the single-floor search first and fall back to
/// the multi-floor search only when no single floor can satisfy the
/// request; the multi-floor result is never preferred even when it would
/// score a lower travel time.
#[derive(Debug)]
pub struct BookingEngine {
    /// Occupancy state, the single source of truth for availability
    inventory: RoomInventory,
    /// Random number generator for occupancy randomization
    rng: StdRng,
}

impl BookingEngine {
    /// Create an engine over the given layout with every room free,
    /// using an entropy-seeded random source.
    pub fn new(layout: HotelLayout) -> Self {
        debug!("Using entropy-based random seed");
        Self {
            inventory: RoomInventory::new(layout),
            rng: rand::SeedableRng::from_entropy(),
        }
    }

    /// Create an engine with a deterministic random source, for
    /// reproducible occupancy randomization.
    pub fn with_seed(layout: HotelLayout, seed: u64) -> Self {
        info!("Using deterministic seed: {}", seed);
        Self {
            inventory: RoomInventory::new(layout),
            rng: rand::SeedableRng::seed_from_u64(seed),
        }
    }

    /// Read access to the underlying inventory.
    pub fn inventory(&self) -> &RoomInventory {
        &self.inventory
    }

    /// Book `count` rooms automatically, minimizing travel time.
    ///
    /// Prefers rooms on a single floor; falls back to the closest run of
    /// rooms across floors only when no floor has `count` free rooms.
    #[instrument(skip(self))]
    pub fn book_auto(&mut self, count: usize) -> BookingResult<BookingReceipt> {
        if !(MIN_ROOMS_PER_BOOKING..=MAX_ROOMS_PER_BOOKING).contains(&count) {
            warn!("Rejecting booking request for {} rooms", count);
            return Err(BookingError::InvalidRequest { requested: count });
        }

        if let Some(selection) = best_single_floor(&self.inventory, count) {
            return Ok(self.commit(selection, BookingType::SingleFloor));
        }

        debug!("No single floor can hold {} rooms, trying multi-floor", count);
        if let Some(selection) = best_multi_floor(&self.inventory, count) {
            return Ok(self.commit(selection, BookingType::MultiFloor));
        }

        let available = self.inventory.free_count();
        warn!("Cannot book {} rooms, only {} free", count, available);
        Err(BookingError::InsufficientCapacity { requested: count, available })
    }

    /// Book the exact rooms the caller selected.
    ///
    /// Fails without mutating when any room is unknown or occupied. The
    /// receipt preserves the caller's room ordering; travel time is taken
    /// between the lowest and highest room numbers of the selection.
    #[instrument(skip(self, rooms), fields(count = rooms.len()))]
    pub fn book_specific(&mut self, rooms: &[RoomId]) -> BookingResult<BookingReceipt> {
        for &room in rooms {
            match self.inventory.is_free(room) {
                None => {
                    warn!("Rejecting selection, room {} does not exist", room);
                    return Err(BookingError::UnknownRoom(room));
                }
                Some(false) => {
                    warn!("Rejecting selection, room {} is occupied", room);
                    return Err(BookingError::RoomUnavailable(room));
                }
                Some(true) => {}
            }
        }

        let travel = match (rooms.iter().min(), rooms.iter().max()) {
            (Some(&first), Some(&last)) if rooms.len() > 1 => travel_time(first, last),
            _ => 0,
        };
        let floors: BTreeSet<u8> = rooms.iter().map(|room| room.floor()).collect();
        let booking_type = if floors.len() == 1 {
            BookingType::SingleFloor
        } else {
            BookingType::MultiFloor
        };

        for &room in rooms {
            self.inventory.set_free(room, false);
        }
        info!("Booked selected rooms {:?} with travel time {}", rooms, travel);

        Ok(BookingReceipt {
            booked_rooms: rooms.to_vec(),
            travel_time: travel,
            booking_type,
        })
    }

    /// Cancel bookings for the given rooms, making them free again.
    ///
    /// The batch is atomic: every identifier is validated against the
    /// layout before any room is touched, and one unknown identifier fails
    /// the whole call with no mutation. Cancelling an already-free room is
    /// not an error.
    #[instrument(skip(self, rooms), fields(count = rooms.len()))]
    pub fn cancel(&mut self, rooms: &[RoomId]) -> BookingResult<()> {
        for &room in rooms {
            if !self.inventory.contains(room) {
                warn!("Rejecting cancellation, room {} does not exist", room);
                return Err(BookingError::UnknownRoom(room));
            }
        }

        for &room in rooms {
            self.inventory.set_free(room, true);
        }
        info!("Cancelled booking for rooms {:?}", rooms);
        Ok(())
    }

    /// Randomize occupancy across the whole hotel.
    ///
    /// Each room independently ends up free or occupied with equal
    /// probability, drawn from the engine's injected random source.
    pub fn randomize_occupancy(&mut self) {
        self.inventory.randomize(&mut self.rng);
        info!("Randomized occupancy, {} rooms free", self.inventory.free_count());
    }

    /// Restore every room to free.
    pub fn reset(&mut self) {
        self.inventory.reset();
        info!("Reset hotel, all {} rooms free", self.inventory.room_count());
    }

    /// Full availability snapshot, keyed by room number in floor-major
    /// order.
    pub fn availability(&self) -> BTreeMap<RoomId, bool> {
        self.inventory.snapshot()
    }

    /// Current occupancy statistics.
    pub fn stats(&self) -> OccupancyStats {
        OccupancyStats::from_inventory(&self.inventory)
    }

    /// Mark a selected room set occupied and build its receipt.
    fn commit(&mut self, selection: RoomSelection, booking_type: BookingType) -> BookingReceipt {
        for &room in &selection.rooms {
            self.inventory.set_free(room, false);
        }
        info!(
            "Booked rooms {:?} ({}, travel time {})",
            selection.rooms, booking_type, selection.travel_time
        );
        BookingReceipt {
            booked_rooms: selection.rooms,
            travel_time: selection.travel_time,
            booking_type,
        }
    }
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new(HotelLayout::default())
    }
}

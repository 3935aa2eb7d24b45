//! Shared, lock-guarded access to the booking engine
//!
//! The front desk is the concurrency boundary of the crate: a single
//! exclusive lock guards the inventory, held for the full span of a
//! search-then-commit operation so two concurrent bookings can never
//! select overlapping rooms. Availability reads share a read lock. Every
//! operation is a bounded synchronous computation over at most 97 rooms,
//! so no call blocks for long.

use crate::booking::{BookingEngine, BookingReceipt, BookingResult};
use crate::facility::OccupancyStats;
use crate::types::RoomId;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe wrapper around a [`BookingEngine`].
///
/// Wrap in an [`std::sync::Arc`] to share across request-serving threads.
#[derive(Debug)]
pub struct FrontDesk {
    engine: RwLock<BookingEngine>,
}

impl FrontDesk {
    /// Put an engine behind the front desk.
    pub fn new(engine: BookingEngine) -> Self {
        Self { engine: RwLock::new(engine) }
    }

    /// Book `count` rooms automatically. Search and commit happen under
    /// one write-lock acquisition.
    pub fn book_auto(&self, count: usize) -> BookingResult<BookingReceipt> {
        self.write().book_auto(count)
    }

    /// Book the exact rooms the caller selected.
    pub fn book_specific(&self, rooms: &[RoomId]) -> BookingResult<BookingReceipt> {
        self.write().book_specific(rooms)
    }

    /// Cancel bookings for the given rooms.
    pub fn cancel(&self, rooms: &[RoomId]) -> BookingResult<()> {
        self.write().cancel(rooms)
    }

    /// Randomize occupancy across the whole hotel.
    pub fn randomize_occupancy(&self) {
        self.write().randomize_occupancy();
    }

    /// Restore every room to free.
    pub fn reset(&self) {
        self.write().reset();
    }

    /// Full availability snapshot.
    pub fn availability(&self) -> BTreeMap<RoomId, bool> {
        self.read().availability()
    }

    /// Current occupancy statistics.
    pub fn stats(&self) -> OccupancyStats {
        self.read().stats()
    }

    // Engine operations validate before mutating, so the inventory is in a
    // usable state even if a writer panicked; recover the guard instead of
    // propagating the poison.
    fn write(&self) -> RwLockWriteGuard<'_, BookingEngine> {
        self.engine.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, BookingEngine> {
        self.engine.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FrontDesk {
    fn default() -> Self {
        Self::new(BookingEngine::default())
    }
}

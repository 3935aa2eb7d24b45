//! Booking receipt returned to callers
//!
//! Receipts are ephemeral: the engine hands them out and forgets them.
//! Callers that need a booking history persist receipts themselves, e.g.
//! through [`crate::service::export`].

use crate::types::{BookingType, RoomId};
use serde::{Deserialize, Serialize};

/// Outcome of a successful booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Booked rooms, in the order they were assigned or requested
    pub booked_rooms: Vec<RoomId>,
    /// Travel time in minutes between the two extremal rooms of the set
    pub travel_time: u32,
    /// Whether the rooms share a floor or span several
    pub booking_type: BookingType,
}

impl BookingReceipt {
    /// Number of rooms this booking covers.
    pub fn room_count(&self) -> usize {
        self.booked_rooms.len()
    }

    /// Whether all booked rooms share one floor.
    pub fn is_single_floor(&self) -> bool {
        self.booking_type == BookingType::SingleFloor
    }
}

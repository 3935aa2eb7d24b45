//! Error types for booking operations
//!
//! Every failure is detected before any mutation, reported as a typed value
//! and mapped to a transport-level response by the caller. The engine never
//! retries internally and never aborts the process on a documented failure.

use crate::types::RoomId;
use thiserror::Error;

/// Errors that can occur during booking operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The requested room count is outside the 1..=5 booking policy
    #[error("Invalid number of rooms requested: {requested} (bookings allow 1 to 5 rooms)")]
    InvalidRequest {
        /// Room count the caller asked for
        requested: usize,
    },

    /// The identifier names no room in the hotel
    #[error("Room {0} is not a valid room")]
    UnknownRoom(RoomId),

    /// The room exists but is already occupied
    #[error("Room {0} is not available")]
    RoomUnavailable(RoomId),

    /// No arrangement of free rooms satisfies the requested count
    #[error("Not enough rooms available for booking: requested {requested}, {available} free")]
    InsufficientCapacity {
        /// Room count the caller asked for
        requested: usize,
        /// Free rooms across the whole hotel at the time of the request
        available: usize,
    },
}

impl BookingError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            BookingError::InvalidRequest { .. } => "Invalid Request",
            BookingError::UnknownRoom(_) => "Unknown Room",
            BookingError::RoomUnavailable(_) => "Room Unavailable",
            BookingError::InsufficientCapacity { .. } => "Insufficient Capacity",
        }
    }
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

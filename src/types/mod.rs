//! Core types for the hotel booking engine
//!
//! This module contains the room identifier type, the booking
//! classification enum, and the hotel layout configuration with its
//! validation logic.

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::{booking_policy, CliArgs, HotelLayout, LayoutError};
pub use enums::BookingType;
pub use identifiers::RoomId;

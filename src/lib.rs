//! Hotel Booking Engine
//!
//! An in-memory room allocation engine for a fixed hotel layout that
//! assigns rooms to booking requests so as to minimize travel time between
//! the booked rooms.
//!
//! # Overview
//!
//! The hotel has 10 floors: 10 rooms each on floors 1 through 9 and 7
//! rooms on floor 10. Room numbers encode floor and position directly
//! (room 305 is the fifth room on floor 3); walking costs 2 minutes per
//! floor and 1 minute per room.
//!
//! Automatic bookings prefer the cheapest run of rooms on a single floor
//! and fall back to the cheapest run across floors only when no floor has
//! enough free rooms. Manual selection, batch cancellation, randomized
//! occupancy and full reset round out the operation set.
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_booking_engine::{BookingEngine, HotelLayout};
//!
//! let mut engine = BookingEngine::new(HotelLayout::default());
//!
//! // Book three rooms; a fresh hotel yields 101, 102, 103.
//! let receipt = engine.book_auto(3)?;
//! assert_eq!(receipt.booked_rooms.len(), 3);
//! assert!(receipt.is_single_floor());
//!
//! // Cancelling the booking restores the rooms.
//! engine.cancel(&receipt.booked_rooms)?;
//! # Ok::<(), hotel_booking_engine::BookingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: room identifiers, booking classification, layout config
//! - [`facility`]: the room inventory and occupancy statistics
//! - [`booking`]: travel metric, search strategies, the booking engine
//! - [`service`]: lock-guarded shared access, logging, receipt export
//!
//! ## Concurrency
//!
//! The engine itself is single-threaded; share it across threads through
//! [`service::FrontDesk`], which holds an exclusive lock for the full
//! search-then-commit span of each mutating operation.
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod booking;
pub mod facility;
pub mod service;
pub mod types;

// Core types and identifiers
pub use types::{booking_policy, BookingType, CliArgs, HotelLayout, LayoutError, RoomId};

// Facility types and functionality
pub use facility::{OccupancyStats, RoomInventory};

// Booking types and functionality
pub use booking::{
    best_multi_floor, best_single_floor, travel_time, BookingEngine, BookingError,
    BookingReceipt, BookingResult, RoomSelection,
};

// Service types and functionality
pub use service::{write_receipts, ExportError, FrontDesk, LoggingConfig};

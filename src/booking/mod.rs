//! Room allocation: travel metric, search strategies and the booking engine
//!
//! This module is the core of the crate. It contains:
//!
//! - [`travel`]: the travel-time metric between rooms
//! - [`search`]: the single-floor and multi-floor window searches
//! - [`engine`]: the [`BookingEngine`] applying searches to the inventory
//! - [`receipt`]: the result handed back to callers
//! - [`error`]: the typed failure taxonomy
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_booking_engine::booking::BookingEngine;
//! use hotel_booking_engine::types::HotelLayout;
//!
//! let mut engine = BookingEngine::new(HotelLayout::default());
//! let receipt = engine.book_auto(3)?;
//! assert_eq!(receipt.room_count(), 3);
//! assert!(receipt.is_single_floor());
//! # Ok::<(), hotel_booking_engine::BookingError>(())
//! ```

pub mod engine;
pub mod error;
pub mod receipt;
pub mod search;
pub mod travel;

// Re-export all public types for convenience
pub use engine::BookingEngine;
pub use error::{BookingError, BookingResult};
pub use receipt::BookingReceipt;
pub use search::{best_multi_floor, best_single_floor, RoomSelection};
pub use travel::travel_time;

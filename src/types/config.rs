//! Hotel layout configuration and CLI arguments
//!
//! This module contains the hotel topology description with its validation
//! logic, the booking policy constants, and the command line surface of the
//! demo binary.

use super::RoomId;
use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Booking policy constants
pub mod booking_policy {
    /// Minimum number of rooms a single booking may request
    pub const MIN_ROOMS_PER_BOOKING: usize = 1;

    /// Maximum number of rooms a single booking may request
    pub const MAX_ROOMS_PER_BOOKING: usize = 5;
}

/// Highest floor count a layout may declare (floors are two digits at most)
pub const MAX_FLOOR_COUNT: usize = 99;

/// Highest number of rooms a floor may declare; positions never reach 100,
/// which keeps `floor * 100 + position` collision-free across floors
pub const MAX_ROOMS_PER_FLOOR: u8 = 99;

/// Errors produced by hotel layout validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout declares no floors at all
    #[error("Hotel layout must have at least one floor")]
    NoFloors,

    /// The layout declares more floors than identifiers can encode
    #[error("Hotel layout has {count} floors, maximum is {MAX_FLOOR_COUNT}")]
    TooManyFloors {
        /// Number of floors the layout declared
        count: usize,
    },

    /// A floor declares an out-of-range room count
    #[error("Floor {floor} has {count} rooms, must be between 1 and {MAX_ROOMS_PER_FLOOR}")]
    InvalidRoomCount {
        /// The offending floor (1-based)
        floor: u8,
        /// Number of rooms that floor declared
        count: u8,
    },
}

/// Immutable description of the hotel topology: how many floors exist and
/// how many rooms each floor has.
///
/// The default layout is the fixed hotel this engine models: 10 floors with
/// 10 rooms on floors 1 through 9 and 7 rooms on floor 10 (97 rooms total).
/// Custom layouts are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelLayout {
    /// Rooms per floor, indexed by floor - 1
    rooms_per_floor: Vec<u8>,
}

impl Default for HotelLayout {
    fn default() -> Self {
        let mut rooms_per_floor = vec![10; 9];
        rooms_per_floor.push(7);
        Self { rooms_per_floor }
    }
}

impl HotelLayout {
    /// Create a layout from per-floor room counts.
    ///
    /// Entry `i` gives the number of rooms on floor `i + 1`.
    pub fn new(rooms_per_floor: Vec<u8>) -> Result<Self, LayoutError> {
        if rooms_per_floor.is_empty() {
            return Err(LayoutError::NoFloors);
        }
        if rooms_per_floor.len() > MAX_FLOOR_COUNT {
            return Err(LayoutError::TooManyFloors { count: rooms_per_floor.len() });
        }
        for (index, &count) in rooms_per_floor.iter().enumerate() {
            if count == 0 || count > MAX_ROOMS_PER_FLOOR {
                return Err(LayoutError::InvalidRoomCount {
                    floor: (index + 1) as u8,
                    count,
                });
            }
        }
        Ok(Self { rooms_per_floor })
    }

    /// Number of floors in the hotel.
    pub fn floor_count(&self) -> u8 {
        self.rooms_per_floor.len() as u8
    }

    /// Number of rooms on the given floor, or `None` for an unknown floor.
    pub fn rooms_on_floor(&self, floor: u8) -> Option<u8> {
        if floor == 0 {
            return None;
        }
        self.rooms_per_floor.get(usize::from(floor) - 1).copied()
    }

    /// Iterate floors in ascending order (1-based).
    pub fn floors(&self) -> std::ops::RangeInclusive<u8> {
        1..=self.floor_count()
    }

    /// Whether the given identifier names a room that exists in this layout.
    pub fn contains(&self, room: RoomId) -> bool {
        match self.rooms_on_floor(room.floor()) {
            Some(count) => room.position() >= 1 && room.position() <= count,
            None => false,
        }
    }

    /// Total number of rooms across all floors.
    pub fn room_count(&self) -> usize {
        self.rooms_per_floor.iter().map(|&count| usize::from(count)).sum()
    }

    /// All room identifiers in floor-major, position-ascending order.
    pub fn room_ids(&self) -> Vec<RoomId> {
        let mut rooms = Vec::with_capacity(self.room_count());
        for floor in self.floors() {
            let count = self.rooms_per_floor[usize::from(floor) - 1];
            for position in 1..=count {
                rooms.push(RoomId::from_parts(floor, position));
            }
        }
        rooms
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-booking-engine",
    version = "0.1.0",
    about = "Hotel Booking Engine - Assigns rooms to bookings minimizing travel time",
    long_about = "Drives the room allocation engine over the fixed 10-floor hotel layout. \
Bookings prefer rooms on a single floor and fall back to the closest run of rooms \
across floors, scored by travel time (2 minutes per floor, 1 minute per room).

EXAMPLES:
    # Book 3 rooms in an empty hotel
    hotel-booking-engine --book 3

    # Randomize occupancy with a fixed seed, then book twice
    hotel-booking-engine --randomize --seed 42 --book 4 --book 2

    # Book specific rooms and write receipts to a JSONL file
    hotel-booking-engine --select 101,102,103 --output receipts.jsonl

    # Show the full availability map after booking
    hotel-booking-engine --book 5 --print-rooms"
)]
pub struct CliArgs {
    /// Automatic bookings to perform, each booking N rooms (repeatable)
    #[arg(
        long,
        help = "Book N rooms automatically (may be given multiple times)",
        long_help = "Requests an automatic booking of N rooms. May be given multiple \
times; bookings are executed in order. N must be between 1 and 5."
    )]
    pub book: Vec<usize>,

    /// Specific rooms to book manually
    #[arg(
        long,
        value_delimiter = ',',
        help = "Book specific rooms by number, comma-separated (e.g. 101,102)"
    )]
    pub select: Vec<RoomId>,

    /// Rooms whose bookings should be cancelled
    #[arg(
        long,
        value_delimiter = ',',
        help = "Cancel bookings for the given rooms, comma-separated"
    )]
    pub cancel: Vec<RoomId>,

    /// Randomize occupancy before executing bookings
    #[arg(long, help = "Randomize room occupancy before executing bookings")]
    pub randomize: bool,

    /// Random seed for reproducible occupancy
    #[arg(long, help = "Random seed for reproducible occupancy")]
    pub seed: Option<u64>,

    /// Output path for booking receipts (JSONL format)
    #[arg(long, help = "Output path for booking receipts JSONL file")]
    pub output: Option<String>,

    /// Print the availability map after all operations
    #[arg(long, help = "Print the full room availability map as JSON")]
    pub print_rooms: bool,

    /// Print the hotel layout and exit
    #[arg(long, help = "Print the hotel layout in JSON format and exit")]
    pub print_layout: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,
}

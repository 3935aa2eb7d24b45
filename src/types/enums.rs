//! Enumeration types for the hotel booking engine
//!
//! This module contains the booking classification enum shared between the
//! allocation engine and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a committed booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingType {
    /// All booked rooms share one floor
    #[serde(rename = "single-floor")]
    SingleFloor,
    /// Booked rooms span more than one floor
    #[serde(rename = "multi-floor")]
    MultiFloor,
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingType::SingleFloor => write!(f, "single-floor"),
            BookingType::MultiFloor => write!(f, "multi-floor"),
        }
    }
}

impl FromStr for BookingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single-floor" | "singlefloor" | "single" => Ok(BookingType::SingleFloor),
            "multi-floor" | "multifloor" | "multi" => Ok(BookingType::MultiFloor),
            _ => Err(format!("Unknown booking type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_type_display() {
        assert_eq!(BookingType::SingleFloor.to_string(), "single-floor");
        assert_eq!(BookingType::MultiFloor.to_string(), "multi-floor");
    }

    #[test]
    fn test_booking_type_from_str() {
        assert_eq!("single-floor".parse::<BookingType>(), Ok(BookingType::SingleFloor));
        assert_eq!("Multi".parse::<BookingType>(), Ok(BookingType::MultiFloor));
        assert!("triple-floor".parse::<BookingType>().is_err());
    }

    #[test]
    fn test_booking_type_serialization() {
        let json = serde_json::to_string(&BookingType::SingleFloor).unwrap();
        assert_eq!(json, "\"single-floor\"");

        let parsed: BookingType = serde_json::from_str("\"multi-floor\"").unwrap();
        assert_eq!(parsed, BookingType::MultiFloor);
    }
}

//! Integration tests for batch cancellation
//!
//! Cancellation is a single atomic unit: every identifier is validated
//! before any room is freed, and one unknown identifier fails the whole
//! batch without mutation.

use hotel_booking_engine::*;

fn ids(numbers: &[u16]) -> Vec<RoomId> {
    numbers.iter().map(|&n| RoomId::new(n)).collect()
}

/// Test cancelling a booked set frees every room in it
#[test]
fn test_cancellation_frees_booked_rooms() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    let receipt = engine.book_auto(3).unwrap();

    engine.cancel(&receipt.booked_rooms).unwrap();
    for room in &receipt.booked_rooms {
        assert_eq!(engine.availability().get(room), Some(&true));
    }
}

/// Test that cancelling an unknown room fails on a fresh hotel
#[test]
fn test_unknown_room_fails_batch() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    let error = engine.cancel(&ids(&[999])).unwrap_err();

    assert_eq!(error, BookingError::UnknownRoom(RoomId::new(999)));
    assert_eq!(engine.availability(), BookingEngine::new(HotelLayout::default()).availability());
}

/// Test that a batch with a trailing invalid id leaves earlier rooms occupied
#[test]
fn test_invalid_batch_is_fully_rolled_back() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    engine.book_specific(&ids(&[301, 302, 303])).unwrap();

    // 301 and 302 are valid, 1101 is not; nothing may be freed.
    let error = engine.cancel(&ids(&[301, 302, 1101])).unwrap_err();
    assert_eq!(error, BookingError::UnknownRoom(RoomId::new(1101)));

    assert_eq!(engine.availability().get(&RoomId::new(301)), Some(&false));
    assert_eq!(engine.availability().get(&RoomId::new(302)), Some(&false));
    assert_eq!(engine.availability().get(&RoomId::new(303)), Some(&false));
}

/// Test that cancelling already-free rooms is not an error
#[test]
fn test_cancellation_is_idempotent() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    let rooms = ids(&[501, 502]);

    engine.book_specific(&rooms).unwrap();
    engine.cancel(&rooms).unwrap();
    engine.cancel(&rooms).unwrap();

    assert_eq!(engine.availability().get(&RoomId::new(501)), Some(&true));
    assert_eq!(engine.availability().get(&RoomId::new(502)), Some(&true));
}

/// Test that an empty batch succeeds and changes nothing
#[test]
fn test_empty_batch_is_a_no_op() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    engine.book_auto(2).unwrap();
    let before = engine.availability();

    engine.cancel(&[]).unwrap();
    assert_eq!(engine.availability(), before);
}

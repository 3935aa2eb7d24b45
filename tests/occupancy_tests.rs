//! Integration tests for availability snapshots, randomization and reset

use hotel_booking_engine::*;

/// Test that a fresh hotel reports all 97 rooms free
#[test]
fn test_fresh_hotel_availability() {
    let engine = BookingEngine::new(HotelLayout::default());
    let snapshot = engine.availability();

    assert_eq!(snapshot.len(), 97);
    assert!(snapshot.values().all(|&free| free));

    // The snapshot covers exactly the fixed topology.
    assert!(snapshot.contains_key(&RoomId::new(101)));
    assert!(snapshot.contains_key(&RoomId::new(1007)));
    assert!(!snapshot.contains_key(&RoomId::new(1008)));
}

/// Test that the snapshot iterates in floor-major order
#[test]
fn test_availability_snapshot_ordering() {
    let engine = BookingEngine::new(HotelLayout::default());
    let rooms: Vec<RoomId> = engine.availability().keys().copied().collect();

    let mut sorted = rooms.clone();
    sorted.sort();
    assert_eq!(rooms, sorted);
    assert_eq!(rooms.first(), Some(&RoomId::new(101)));
    assert_eq!(rooms.last(), Some(&RoomId::new(1007)));
}

/// Test that equal seeds produce identical random occupancy
#[test]
fn test_randomize_reproducibility() {
    let mut first = BookingEngine::with_seed(HotelLayout::default(), 1234);
    let mut second = BookingEngine::with_seed(HotelLayout::default(), 1234);

    first.randomize_occupancy();
    second.randomize_occupancy();
    assert_eq!(first.availability(), second.availability());
}

/// Test that randomization leaves every room in a definite state
#[test]
fn test_randomize_covers_every_room() {
    let mut engine = BookingEngine::with_seed(HotelLayout::default(), 5);
    engine.randomize_occupancy();

    let snapshot = engine.availability();
    assert_eq!(snapshot.len(), 97);

    let stats = engine.stats();
    assert_eq!(stats.free_rooms + stats.occupied_rooms, 97);
}

/// Test that reset restores every room to free
#[test]
fn test_reset_after_bookings_and_randomization() {
    let mut engine = BookingEngine::with_seed(HotelLayout::default(), 99);
    engine.randomize_occupancy();
    let _ = engine.book_auto(2);

    engine.reset();

    let snapshot = engine.availability();
    assert_eq!(snapshot.len(), 97);
    assert!(snapshot.values().all(|&free| free));
    assert_eq!(engine.stats().occupied_rooms, 0);
}

/// Test occupancy statistics after a known sequence of bookings
#[test]
fn test_stats_reflect_bookings() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    engine.book_auto(5).unwrap();
    engine.book_specific(&[RoomId::new(1001)]).unwrap();

    let stats = engine.stats();
    assert_eq!(stats.total_rooms, 97);
    assert_eq!(stats.occupied_rooms, 6);
    assert_eq!(stats.free_rooms, 91);
    assert_eq!(stats.free_rooms_per_floor[0], 5);
    assert_eq!(stats.free_rooms_per_floor[9], 6);
}

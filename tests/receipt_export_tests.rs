//! Integration tests for receipt JSONL export

use hotel_booking_engine::*;
use std::fs;

/// Test that exported receipts round-trip through serde_json
#[test]
fn test_receipts_round_trip_through_jsonl() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    let receipts = vec![
        engine.book_auto(3).unwrap(),
        engine.book_specific(&[RoomId::new(1001), RoomId::new(1002)]).unwrap(),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipts.jsonl");
    write_receipts(&path, &receipts).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);

    let parsed: Vec<BookingReceipt> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, receipts);
}

/// Test that the exported JSON uses the wire field names and spellings
#[test]
fn test_exported_json_field_names() {
    let mut engine = BookingEngine::new(HotelLayout::default());
    let receipt = engine.book_auto(2).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.jsonl");
    write_receipts(&path, std::slice::from_ref(&receipt)).unwrap();

    let line = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["booked_rooms"], serde_json::json!([101, 102]));
    assert_eq!(value["travel_time"], serde_json::json!(1));
    assert_eq!(value["booking_type"], serde_json::json!("single-floor"));
}

/// Test that export fails cleanly on an unwritable path
#[test]
fn test_export_to_invalid_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("receipts.jsonl");

    let error = write_receipts(&path, &[]).unwrap_err();
    assert!(matches!(error, ExportError::Io(_)));
}

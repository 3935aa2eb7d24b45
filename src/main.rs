// Hotel Booking Engine - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-booking-engine --book 3
// ```
//
// Or with randomized occupancy:
//
// ```console
// $ ./target/release/hotel-booking-engine --randomize --seed 42 --book 4 --print-rooms
// ```

use anyhow::Context;
use clap::Parser;
use hotel_booking_engine::{
    BookingEngine, BookingReceipt, CliArgs, FrontDesk, HotelLayout, LoggingConfig,
};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_layout {
        match serde_json::to_string_pretty(&HotelLayout::default()) {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize hotel layout: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting hotel booking engine");

    if let Err(e) = run(&args) {
        error!("Booking run failed: {:#}", e);
        process::exit(1);
    }

    info!("Hotel booking engine completed successfully");
}

/// Execute the requested operations against a fresh hotel
fn run(args: &CliArgs) -> anyhow::Result<()> {
    let engine = match args.seed {
        Some(seed) => BookingEngine::with_seed(HotelLayout::default(), seed),
        None => BookingEngine::new(HotelLayout::default()),
    };
    let desk = FrontDesk::new(engine);

    if args.randomize {
        eprintln!("Randomizing occupancy...");
        desk.randomize_occupancy();
    }

    let mut receipts: Vec<BookingReceipt> = Vec::new();

    for &count in &args.book {
        match desk.book_auto(count) {
            Ok(receipt) => {
                eprintln!(
                    "Booked {} rooms: {:?} ({}, travel time {})",
                    receipt.room_count(),
                    receipt.booked_rooms,
                    receipt.booking_type,
                    receipt.travel_time
                );
                receipts.push(receipt);
            }
            Err(e) => eprintln!("Booking {} rooms failed: {}", count, e),
        }
    }

    if !args.select.is_empty() {
        match desk.book_specific(&args.select) {
            Ok(receipt) => {
                eprintln!(
                    "Booked selected rooms: {:?} ({}, travel time {})",
                    receipt.booked_rooms, receipt.booking_type, receipt.travel_time
                );
                receipts.push(receipt);
            }
            Err(e) => eprintln!("Selected booking failed: {}", e),
        }
    }

    if !args.cancel.is_empty() {
        match desk.cancel(&args.cancel) {
            Ok(()) => eprintln!("Successfully cancelled booking for rooms: {:?}", args.cancel),
            Err(e) => eprintln!("Cancellation failed: {}", e),
        }
    }

    // Emit receipts to the requested sink
    if let Some(path) = &args.output {
        hotel_booking_engine::write_receipts(path, &receipts)
            .with_context(|| format!("Failed to write receipts to '{}'", path))?;
        eprintln!("Receipts written to: {}", path);
    } else {
        for receipt in &receipts {
            let line =
                serde_json::to_string(receipt).context("Failed to serialize receipt")?;
            println!("{}", line);
        }
    }

    if args.print_rooms {
        let snapshot = desk.availability();
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize availability snapshot")?;
        println!("{}", json);
    }

    print_occupancy_summary(&desk);
    Ok(())
}

/// Print the closing occupancy summary
fn print_occupancy_summary(desk: &FrontDesk) {
    let stats = desk.stats();
    eprintln!();
    eprintln!("Occupancy Summary:");
    eprintln!("  Total Rooms: {}", stats.total_rooms);
    eprintln!("  Free Rooms: {}", stats.free_rooms);
    eprintln!("  Occupied Rooms: {}", stats.occupied_rooms);
    eprintln!("  Occupancy: {:.1}%", stats.occupancy_percentage());
}

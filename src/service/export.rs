//! Booking receipt export
//!
//! Receipts are ephemeral engine output; callers that want a booking
//! history write them out as JSON lines, one receipt per line.

use crate::booking::BookingReceipt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while exporting receipts
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write receipts to `path` in JSONL format, one receipt per line.
pub fn write_receipts(
    path: impl AsRef<Path>,
    receipts: &[BookingReceipt],
) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for receipt in receipts {
        let line = serde_json::to_string(receipt)?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    info!("Wrote {} receipts to {}", receipts.len(), path.as_ref().display());
    Ok(())
}

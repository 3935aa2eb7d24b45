//! Service layer: shared engine access, logging and receipt export
//!
//! This module wraps the booking engine for use by a concurrent caller
//! (the [`FrontDesk`] lock discipline), configures tracing for the
//! binary ([`LoggingConfig`]), and persists receipts ([`export`]).

pub mod export;
pub mod front_desk;
pub mod logging;

// Re-export all public types for convenience
pub use export::{write_receipts, ExportError};
pub use front_desk::FrontDesk;
pub use logging::LoggingConfig;

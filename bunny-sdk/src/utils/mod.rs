//! Utility modules.

/// Timestamp codec for the zone-less date strings Bunny.net returns.
pub mod datetime;

/// Log truncation so large response bodies don't flood debug logs.
pub mod log_sanitizer;

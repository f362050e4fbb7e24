//! Data models
//!
//! Snapshots returned by the marketplace API. The client never mutates them.
//! All IDs are `i64` (the backend uses `Long` primary keys).

pub mod activity;
pub mod booking;

// Re-exports
pub use activity::*;
pub use booking::*;

/// Activity identifier
pub type ActivityId = i64;

/// Booking identifier
pub type BookingId = i64;

/// User identifier
pub type UserId = i64;

//! Shared types for the activity marketplace
//!
//! Wire types exchanged with the marketplace REST API. Used by the API
//! client, the view layer and the test fakes.

pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use models::{Activity, ActivityId, Booking, BookingId, UserId};
pub use request::{ActivityFilter, CreateBookingRequest};
pub use response::ErrorBody;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

//! Market Client - HTTP client for the activity marketplace API
//!
//! Wraps the four backend endpoints (list activities, create booking,
//! list bookings, cancel booking) behind the [`MarketplaceApi`] trait and
//! normalizes error responses into [`ClientError::Request`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::{HttpMarketClient, MarketplaceApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::{Activity, ActivityFilter, Booking, BookingId, CreateBookingRequest, UserId};

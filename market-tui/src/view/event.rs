//! Completions delivered back to the view controller

use market_client::ClientResult;
use shared::{Activity, ActivityId, Booking, BookingId};

/// Result of background work spawned by a user action
#[derive(Debug)]
pub enum ViewEvent {
    ActivitiesLoaded {
        generation: u64,
        result: ClientResult<Vec<Activity>>,
    },
    BookingCreated {
        activity_id: ActivityId,
        result: ClientResult<Booking>,
    },
    BookingsLoaded {
        generation: u64,
        result: ClientResult<Vec<Booking>>,
    },
    BookingCancelled {
        booking_id: BookingId,
        result: ClientResult<()>,
    },
    NoticeExpired {
        generation: u64,
    },
}

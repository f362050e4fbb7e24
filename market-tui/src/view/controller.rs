//! View controller
//!
//! Owns [`ViewState`] and is the only writer. Requests overlap freely; each
//! loadable section tags its requests with a generation and drops responses
//! older than the latest request it issued.

use std::sync::Arc;

use market_client::{ClientError, MarketplaceApi};
use shared::{ActivityFilter, ActivityId, BookingId, CreateBookingRequest, UserId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{FilterField, NoticeTimer, ViewEvent, ViewState};

/// Shown when loading activities fails for a reason other than an HTTP status
pub const FAILED_TO_LOAD_ACTIVITIES: &str = "Failed to load activities";

/// Shown for any other failure without an HTTP status
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub struct ViewController<A> {
    api: Arc<A>,
    user_id: UserId,
    state: ViewState,
    events: UnboundedSender<ViewEvent>,
    activities_generation: u64,
    bookings_generation: u64,
    notice_timer: NoticeTimer,
}

impl<A: MarketplaceApi + 'static> ViewController<A> {
    /// Create a controller for `user_id` and the receiver its completions arrive on
    pub fn new(api: Arc<A>, user_id: UserId) -> (Self, UnboundedReceiver<ViewEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            api,
            user_id,
            state: ViewState::default(),
            events,
            activities_generation: 0,
            bookings_generation: 0,
            notice_timer: NoticeTimer::default(),
        };
        (controller, rx)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    // ========== Actions ==========

    /// Initial load, unfiltered
    pub fn mount(&mut self) {
        self.load_activities(ActivityFilter::default());
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.state.filters.set(field, value);
    }

    /// Load activities with the trimmed filter inputs
    pub fn search(&mut self) {
        let filter = self.state.filters.to_filter();
        self.load_activities(filter);
    }

    /// Reset every filter input and reload unfiltered
    pub fn clear(&mut self) {
        self.state.filters = Default::default();
        self.load_activities(ActivityFilter::default());
    }

    /// Book an activity for the current user.
    ///
    /// Returns `false` without doing anything when that activity is already
    /// being booked.
    pub fn book(&mut self, activity_id: ActivityId) -> bool {
        if self.state.is_booking(activity_id) {
            return false;
        }
        self.state.booking_in_flight = Some(activity_id);

        let request = CreateBookingRequest {
            user_id: self.user_id,
            activity_id,
        };
        tracing::info!(activity_id, user_id = self.user_id, "Booking activity");

        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.create_booking(&request).await;
            let _ = events.send(ViewEvent::BookingCreated {
                activity_id,
                result,
            });
        });
        true
    }

    /// Replace the bookings list with the current user's bookings
    pub fn load_my_bookings(&mut self) {
        self.bookings_generation += 1;
        let generation = self.bookings_generation;
        self.state.bookings.start_loading();

        let user_id = self.user_id;
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.list_bookings(user_id).await;
            let _ = events.send(ViewEvent::BookingsLoaded { generation, result });
        });
    }

    /// Cancel one of the current user's bookings
    pub fn cancel_booking(&mut self, booking_id: BookingId) -> bool {
        if self.state.cancelling == Some(booking_id) {
            return false;
        }
        self.state.cancelling = Some(booking_id);
        tracing::info!(booking_id, user_id = self.user_id, "Cancelling booking");

        let user_id = self.user_id;
        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.cancel_booking(booking_id, user_id).await;
            let _ = events.send(ViewEvent::BookingCancelled { booking_id, result });
        });
        true
    }

    fn load_activities(&mut self, filter: ActivityFilter) {
        self.activities_generation += 1;
        let generation = self.activities_generation;
        self.state.activities.start_loading();
        tracing::debug!(generation, ?filter, "Loading activities");

        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.list_activities(&filter).await;
            let _ = events.send(ViewEvent::ActivitiesLoaded { generation, result });
        });
    }

    fn show_notice(&mut self, text: impl Into<String>) {
        self.state.notice = Some(text.into());
        self.notice_timer.restart(&self.events);
    }

    // ========== Completions ==========

    /// Fold a completion into the state
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ActivitiesLoaded { generation, result } => {
                if generation != self.activities_generation {
                    tracing::debug!(generation, "Dropping stale activities response");
                    return;
                }
                match result {
                    Ok(activities) => {
                        tracing::info!(count = activities.len(), "Activities loaded");
                        self.state.activities.finish(activities);
                    }
                    Err(e) => self
                        .state
                        .activities
                        .fail(display_error(&e, FAILED_TO_LOAD_ACTIVITIES)),
                }
            }
            ViewEvent::BookingCreated {
                activity_id,
                result,
            } => {
                match result {
                    Ok(booking) => {
                        tracing::info!(booking_id = booking.id, activity_id, "Booked");
                        self.show_notice("Booked!");
                    }
                    Err(e) => {
                        let message = display_error(&e, UNKNOWN_ERROR);
                        self.show_notice(format!("Booking failed: {}", message));
                    }
                }
                // Only release the button this request disabled
                if self.state.booking_in_flight == Some(activity_id) {
                    self.state.booking_in_flight = None;
                }
            }
            ViewEvent::BookingsLoaded { generation, result } => {
                if generation != self.bookings_generation {
                    tracing::debug!(generation, "Dropping stale bookings response");
                    return;
                }
                match result {
                    Ok(bookings) => {
                        tracing::info!(count = bookings.len(), "Bookings loaded");
                        self.state.bookings.finish(bookings);
                    }
                    Err(e) => self.state.bookings.fail(display_error(&e, UNKNOWN_ERROR)),
                }
            }
            ViewEvent::BookingCancelled { booking_id, result } => {
                match result {
                    Ok(()) => {
                        self.state.bookings.items.retain(|b| b.id != booking_id);
                        self.show_notice("Booking cancelled");
                    }
                    Err(e) => {
                        let message = display_error(&e, UNKNOWN_ERROR);
                        self.show_notice(format!("Cancel failed: {}", message));
                    }
                }
                if self.state.cancelling == Some(booking_id) {
                    self.state.cancelling = None;
                }
            }
            ViewEvent::NoticeExpired { generation } => {
                if self.notice_timer.is_current(generation) {
                    self.state.notice = None;
                }
            }
        }
    }
}

/// Text shown for a failure: the server's message for HTTP failures, a
/// fixed string for everything else. The underlying error only goes to the log.
fn display_error(err: &ClientError, fallback: &str) -> String {
    match err.request_message() {
        Some(message) => message.to_string(),
        None => {
            tracing::warn!(error = %err, "Request failed");
            fallback.to_string()
        }
    }
}

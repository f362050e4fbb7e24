//! View state
//!
//! Plain data owned by [`ViewController`](super::ViewController). Each
//! section goes `Idle -> Loading -> (Loaded | Errored)` and re-enters
//! `Loading` on every new request.

use shared::{Activity, ActivityFilter, ActivityId, Booking, BookingId};

/// Lifecycle of a loadable section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// A list fetched from the API plus its loading and error state
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub status: SectionStatus,
    pub items: Vec<T>,
    pub error: Option<String>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            status: SectionStatus::Idle,
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> Section<T> {
    /// Enter `Loading`. Prior items stay visible until the response lands.
    pub fn start_loading(&mut self) {
        self.status = SectionStatus::Loading;
        self.error = None;
    }

    pub fn finish(&mut self, items: Vec<T>) {
        self.status = SectionStatus::Loaded;
        self.items = items;
        self.error = None;
    }

    /// Enter `Errored`, keeping whatever was shown before
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = SectionStatus::Errored;
        self.error = Some(message.into());
    }

    pub fn is_loading(&self) -> bool {
        self.status == SectionStatus::Loading
    }
}

/// Filter input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    City,
    Category,
    MaxPrice,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [Self::City, Self::Category, Self::MaxPrice];

    pub fn label(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Category => "Category",
            Self::MaxPrice => "Max price",
        }
    }
}

/// Raw text of the filter inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub city: String,
    pub category: String,
    pub max_price: String,
}

impl FilterInputs {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::City => &self.city,
            FilterField::Category => &self.category,
            FilterField::MaxPrice => &self.max_price,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::City => self.city = value,
            FilterField::Category => self.category = value,
            FilterField::MaxPrice => self.max_price = value,
        }
    }

    /// Trimmed filter; blank fields are omitted
    pub fn to_filter(&self) -> ActivityFilter {
        ActivityFilter::from_input(&self.city, &self.category, &self.max_price)
    }
}

/// Everything the page displays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub filters: FilterInputs,
    pub activities: Section<Activity>,
    /// Activity whose Book button is disabled while its request runs
    pub booking_in_flight: Option<ActivityId>,
    pub bookings: Section<Booking>,
    /// Booking whose cancel request is running
    pub cancelling: Option<BookingId>,
    /// Transient notice, cleared by the notice timer
    pub notice: Option<String>,
}

impl ViewState {
    pub fn is_booking(&self, activity_id: ActivityId) -> bool {
        self.booking_in_flight == Some(activity_id)
    }
}

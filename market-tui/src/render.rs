//! Display strings derived from the view state

use shared::{Activity, Booking};

use crate::view::{Section, SectionStatus};

/// Placeholder for a missing rating or duration
pub const MISSING: &str = "—";

pub const NO_ACTIVITIES: &str = "No activities found.";
pub const NO_BOOKINGS: &str = "No bookings yet.";

/// `{city} • {category}`
pub fn location_line(activity: &Activity) -> String {
    format!("{} • {}", activity.city, activity.category)
}

/// `€{price} • Rating: {rating} • {duration}h`
pub fn details_line(activity: &Activity) -> String {
    format!(
        "€{} • Rating: {} • {}h",
        activity.price.normalize(),
        optional(activity.rating),
        optional(activity.duration_hours)
    )
}

pub fn booking_line(booking: &Booking) -> String {
    format!(
        "#{} {} ({}) • €{} • booked {}",
        booking.id,
        booking.activity.title,
        booking.activity.city,
        booking.activity.price.normalize(),
        booking.booked_at.format("%Y-%m-%d %H:%M")
    )
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Status line above the activity list, if any
pub fn activities_status(section: &Section<Activity>) -> Option<String> {
    match section.status {
        SectionStatus::Loading => Some("Loading…".to_string()),
        SectionStatus::Errored => section.error.as_ref().map(|e| format!("Error: {}", e)),
        SectionStatus::Loaded if section.items.is_empty() => Some(NO_ACTIVITIES.to_string()),
        _ => None,
    }
}

/// Status line above the bookings list, if any
pub fn bookings_status(section: &Section<Booking>) -> Option<String> {
    match section.status {
        SectionStatus::Idle => Some("Press m to load your bookings.".to_string()),
        SectionStatus::Loading => Some("Loading…".to_string()),
        SectionStatus::Errored => section.error.as_ref().map(|e| format!("Error: {}", e)),
        SectionStatus::Loaded if section.items.is_empty() => Some(NO_BOOKINGS.to_string()),
        SectionStatus::Loaded => None,
    }
}

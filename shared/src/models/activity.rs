//! Activity Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ActivityId;

/// Activity entity (a bookable tour, tasting, trip...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub city: String,
    pub category: String,
    /// Price per person, always positive. Sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// `None` = unrated
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
}

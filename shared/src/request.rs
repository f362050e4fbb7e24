//! Request types sent to the marketplace API

use serde::{Deserialize, Serialize};

use crate::models::{ActivityId, UserId};

/// Body of `POST /bookings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: UserId,
    pub activity_id: ActivityId,
}

/// Query filters for `GET /activities`
///
/// Values are passed through as typed by the user. Matching rules (substring
/// city match, max price parsing) belong to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub city: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<String>,
}

impl ActivityFilter {
    /// Build a filter from raw input fields.
    ///
    /// Each field is trimmed; a field that is empty after trimming is dropped,
    /// so the server never sees an empty-string filter.
    pub fn from_input(city: &str, category: &str, max_price: &str) -> Self {
        Self {
            city: non_blank(city),
            category: non_blank(category),
            max_price: non_blank(max_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.category.is_none() && self.max_price.is_none()
    }

    /// Query parameters for the fields that are present
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("city", self.city.as_deref()),
            ("category", self.category.as_deref()),
            ("maxPrice", self.max_price.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect()
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_fields_are_omitted() {
        let filter = ActivityFilter::from_input("   ", "\t", " \n ");
        assert!(filter.is_empty());
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let filter = ActivityFilter::from_input("  Lisbon ", "", " 20 ");
        assert_eq!(filter.city.as_deref(), Some("Lisbon"));
        assert_eq!(filter.category, None);
        assert_eq!(
            filter.query_pairs(),
            vec![("city", "Lisbon"), ("maxPrice", "20")]
        );
    }

    #[test]
    fn test_empty_string_treated_as_absent() {
        let filter = ActivityFilter {
            city: Some(String::new()),
            category: Some("Food".to_string()),
            max_price: None,
        };
        assert_eq!(filter.query_pairs(), vec![("category", "Food")]);
    }

    #[test]
    fn test_create_booking_body() {
        let body = CreateBookingRequest { user_id: 1, activity_id: 4 };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "userId": 1, "activityId": 4 })
        );
    }
}

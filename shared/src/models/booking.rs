//! Booking Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Activity, BookingId, UserId};

/// Booking entity
///
/// Carries the activity snapshot taken at booking time. The snapshot is
/// read-only and is never re-fetched on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    /// Server-assigned creation instant
    #[serde(with = "booked_at")]
    pub booked_at: DateTime<Utc>,
    pub activity: Activity,
}

/// `bookedAt` codec.
///
/// The backend writes a zone-less `LocalDateTime` (`2025-03-01T10:15:30.123`),
/// other deployments send RFC 3339. Zone-less values are read as UTC.
mod booked_at {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid bookedAt timestamp: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
    }
}

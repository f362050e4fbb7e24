//! Marketplace API client
//!
//! [`MarketplaceApi`] is the seam the view layer talks to;
//! [`HttpMarketClient`] is the network implementation.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderValue};

use crate::http::{decode_or_raise, ensure_success};
use crate::{
    Activity, ActivityFilter, Booking, BookingId, ClientConfig, ClientResult, CreateBookingRequest,
    UserId,
};

/// Operations exposed by the marketplace backend
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// `GET /activities`, in server order. Absent filter fields are not sent.
    async fn list_activities(&self, filter: &ActivityFilter) -> ClientResult<Vec<Activity>>;

    /// `POST /bookings`
    async fn create_booking(&self, request: &CreateBookingRequest) -> ClientResult<Booking>;

    /// `GET /bookings?userId=`
    async fn list_bookings(&self, user_id: UserId) -> ClientResult<Vec<Booking>>;

    /// `DELETE /bookings/{id}?userId=`. An empty success body is fine.
    async fn cancel_booking(&self, booking_id: BookingId, user_id: UserId) -> ClientResult<()>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct HttpMarketClient {
    client: Client,
    base_url: String,
}

impl HttpMarketClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API base URL, for display
    pub fn api_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl MarketplaceApi for HttpMarketClient {
    async fn list_activities(&self, filter: &ActivityFilter) -> ClientResult<Vec<Activity>> {
        let query = filter.query_pairs();
        tracing::debug!(?query, "GET /activities");

        let mut req = self
            .client
            .get(self.url("activities"))
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        if !query.is_empty() {
            req = req.query(&query);
        }

        let response = req.send().await?;
        decode_or_raise(response).await
    }

    async fn create_booking(&self, request: &CreateBookingRequest) -> ClientResult<Booking> {
        tracing::debug!(
            user_id = request.user_id,
            activity_id = request.activity_id,
            "POST /bookings"
        );

        let response = self
            .client
            .post(self.url("bookings"))
            .json(request)
            .send()
            .await?;
        decode_or_raise(response).await
    }

    async fn list_bookings(&self, user_id: UserId) -> ClientResult<Vec<Booking>> {
        tracing::debug!(user_id, "GET /bookings");

        let response = self
            .client
            .get(self.url("bookings"))
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        decode_or_raise(response).await
    }

    async fn cancel_booking(&self, booking_id: BookingId, user_id: UserId) -> ClientResult<()> {
        tracing::debug!(booking_id, user_id, "DELETE /bookings");

        let response = self
            .client
            .delete(self.url(&format!("bookings/{}", booking_id)))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

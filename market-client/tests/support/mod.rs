//! In-process fake of the marketplace backend
//!
//! Serves the four endpoints from memory on an ephemeral port and records
//! what the client sent, so tests can assert on the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use shared::{Activity, Booking, CreateBookingRequest, Decimal, ErrorBody};

/// Recorded request
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: Option<String>,
    pub cache_control: Option<String>,
}

/// Canned failure returned for every request while set
#[derive(Debug, Clone)]
pub struct Failure {
    pub status: StatusCode,
    pub body: String,
    pub content_type: &'static str,
}

#[derive(Default)]
pub struct BackendState {
    pub activities: Vec<Activity>,
    pub bookings: Vec<Booking>,
    pub requests: Vec<Recorded>,
    pub failure: Option<Failure>,
    next_booking_id: i64,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

pub fn activity(id: i64, title: &str, city: &str, category: &str, price: i64) -> Activity {
    Activity {
        id,
        title: title.to_string(),
        city: city.to_string(),
        category: category.to_string(),
        price: Decimal::new(price, 0),
        rating: Some(4.5),
        duration_hours: Some(2.0),
    }
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        activity(1, "Lisbon Food Tour", "Lisbon", "Food", 35),
        activity(2, "Barcelona Gaudi Walk", "Barcelona", "Culture", 25),
        activity(3, "Amsterdam Canal Cruise", "Amsterdam", "Adventure", 20),
    ]
}

impl FakeBackend {
    pub fn new(activities: Vec<Activity>) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            state.activities = activities;
            state.next_booking_id = 1;
        }
        backend
    }

    /// Every following request answers with `status` and a raw body
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        self.state.lock().unwrap().failure = Some(Failure {
            status,
            body: body.to_string(),
            content_type: "application/json",
        });
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().failure = None;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.state.lock().unwrap().bookings.clone()
    }

    /// Bind to an ephemeral port and serve in the background. Returns the base URL.
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn router(&self) -> Router {
        Router::new()
            .route("/activities", get(list_activities))
            .route("/bookings", get(list_bookings).post(create_booking))
            .route("/bookings/{id}", delete(cancel_booking))
            .with_state(self.clone())
    }

    fn record(&self, method: &'static str, path: String, query: Option<String>, headers: &HeaderMap) -> Option<Response> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(Recorded {
            method,
            path,
            query,
            cache_control: headers
                .get("cache-control")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
        state.failure.clone().map(|f| {
            (f.status, [("content-type", f.content_type)], f.body).into_response()
        })
    }
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

async fn list_activities(
    State(backend): State<FakeBackend>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = backend.record("GET", "/activities".into(), raw, &headers) {
        return failure;
    }

    let max_price = match params.get("maxPrice").map(|p| p.parse::<Decimal>()) {
        Some(Ok(p)) => Some(p),
        Some(Err(_)) => return error(StatusCode::BAD_REQUEST, "maxPrice must be a number"),
        None => None,
    };

    let state = backend.state.lock().unwrap();
    let activities: Vec<Activity> = state
        .activities
        .iter()
        .filter(|a| {
            params
                .get("city")
                .is_none_or(|c| a.city.to_lowercase().contains(&c.to_lowercase()))
        })
        .filter(|a| params.get("category").is_none_or(|c| a.category.eq_ignore_ascii_case(c)))
        .filter(|a| max_price.is_none_or(|p| a.price <= p))
        .cloned()
        .collect();

    Json(activities).into_response()
}

async fn create_booking(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Json(request): Json<CreateBookingRequest>,
) -> Response {
    if let Some(failure) = backend.record("POST", "/bookings".into(), None, &headers) {
        return failure;
    }
    if request.user_id <= 0 {
        return error(StatusCode::BAD_REQUEST, "userId must be > 0");
    }

    let mut state = backend.state.lock().unwrap();
    let Some(activity) = state.activities.iter().find(|a| a.id == request.activity_id).cloned() else {
        return error(
            StatusCode::NOT_FOUND,
            format!("Activity not found: {}", request.activity_id),
        );
    };

    let booking = Booking {
        id: state.next_booking_id,
        user_id: request.user_id,
        booked_at: chrono::Utc::now(),
        activity,
    };
    state.next_booking_id += 1;
    state.bookings.push(booking.clone());

    (StatusCode::CREATED, Json(booking)).into_response()
}

async fn list_bookings(
    State(backend): State<FakeBackend>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = backend.record("GET", "/bookings".into(), raw, &headers) {
        return failure;
    }
    let Some(user_id) = params.get("userId").and_then(|u| u.parse::<i64>().ok()) else {
        return error(StatusCode::BAD_REQUEST, "userId must be > 0");
    };

    let state = backend.state.lock().unwrap();
    let bookings: Vec<Booking> = state
        .bookings
        .iter()
        .filter(|b| b.user_id == user_id)
        .cloned()
        .collect();
    Json(bookings).into_response()
}

async fn cancel_booking(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = backend.record("DELETE", format!("/bookings/{id}"), raw, &headers) {
        return failure;
    }
    let user_id = params.get("userId").and_then(|u| u.parse::<i64>().ok());

    let mut state = backend.state.lock().unwrap();
    let Some(pos) = state
        .bookings
        .iter()
        .position(|b| b.id == id && Some(b.user_id) == user_id)
    else {
        return error(StatusCode::NOT_FOUND, format!("Booking not found: {id}"));
    };
    state.bookings.remove(pos);

    StatusCode::NO_CONTENT.into_response()
}

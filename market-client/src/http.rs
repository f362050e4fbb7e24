//! Response decoding shared by every API call
//!
//! One decode-or-raise routine: a non-success status becomes
//! [`ClientError::Request`], with the message taken from the body's `error`
//! member when the body is a JSON object carrying one, and `HTTP {status}`
//! otherwise. A missing or unparseable body is never an error of its own.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, ClientResult};

/// Fail on non-success status, otherwise decode the JSON body as `T`
pub async fn decode_or_raise<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = ensure_success(response).await?;
    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Fail on non-success status. The body of a successful response is left unread.
pub async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    // A body that cannot be read is treated like an empty one
    let body = response.bytes().await.unwrap_or_default();
    let message = error_message(status, &body);

    tracing::warn!(status = status.as_u16(), %url, %message, "API request failed");

    Err(ClientError::Request {
        status: status.as_u16(),
        message,
    })
}

/// Best-effort error message for a failed response body
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => generic_message(status),
        },
        _ => generic_message(status),
    }
}

fn generic_message(status: StatusCode) -> String {
    format!("HTTP {}", status.as_u16())
}

//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success HTTP status.
    ///
    /// `message` is the `error` member of the JSON body when there is one,
    /// otherwise `HTTP {status}`.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Success status but the body is not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Message of a `Request` error, `None` for every other kind
    pub fn request_message(&self) -> Option<&str> {
        match self {
            Self::Request { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a `Request` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message_only() {
        let err = ClientError::Request {
            status: 400,
            message: "city required".to_string(),
        };
        assert_eq!(err.to_string(), "city required");
        assert_eq!(err.request_message(), Some("city required"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_other_kinds_have_no_request_message() {
        let err = ClientError::InvalidResponse("JSON parse error".to_string());
        assert_eq!(err.request_message(), None);
        assert_eq!(err.status(), None);
    }
}

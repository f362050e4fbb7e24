//! Response types
//!
//! The marketplace API answers failures with a small JSON body:
//! ```json
//! { "error": "Activity not found: 42" }
//! ```
//! Clients treat it as best-effort: the body may be absent or malformed.

use serde::{Deserialize, Serialize};

/// Error body convention of the marketplace API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

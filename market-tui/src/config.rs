//! Front end configuration

use market_client::{ClientConfig, UserId};

/// Hardcoded demo user (there is no login)
pub const DEMO_USER_ID: UserId = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client: ClientConfig,
    pub user_id: UserId,
}

impl Config {
    /// API base URL from the environment (or `.env`), demo user fixed
    pub fn from_env() -> Self {
        Self::with_client(ClientConfig::from_env())
    }

    pub fn with_client(client: ClientConfig) -> Self {
        Self {
            client,
            user_id: DEMO_USER_ID,
        }
    }
}

//! Bot configuration loaded from the environment.

use crate::error::{BotError, Result};

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the finance API base URL.
pub const API_URL_ENV: &str = "API_URL";

/// Immutable bot configuration, read once at startup and passed by
/// reference from then on.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token.
    pub telegram_token: String,

    /// Base URL of the finance API.
    pub api_url: String,
}

impl BotConfig {
    /// Reads the configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let telegram_token =
            std::env::var(TELEGRAM_TOKEN_ENV).map_err(|_| BotError::NoToken)?;
        let api_url = std::env::var(API_URL_ENV).map_err(|_| BotError::NoApiUrl)?;

        Ok(Self {
            telegram_token,
            api_url,
        })
    }
}

//! Error types for the Telegram bot.

use thiserror::Error;

/// Errors that can occur while setting up or running the bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set the TELEGRAM_TOKEN environment variable.")]
    NoToken,

    /// Finance API base URL not provided.
    #[error("Finance API URL not set. Set the API_URL environment variable.")]
    NoApiUrl,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    StartFailed(String),

    /// Finance API client could not be constructed.
    #[error("Finance API client error: {0}")]
    Api(#[from] myfinance_api::ApiError),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;

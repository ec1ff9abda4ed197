//! Telegram bot front end for the MyFinance backend.
//!
//! The bot receives slash-commands and free-form `+valor descrição,
//! categoria` messages, translates each one into a single finance API call,
//! and formats the response back into a chat reply. It keeps no state
//! between messages; the `telegram_id` supplied with every update is the
//! only user handle, and it is forwarded to the backend unchanged.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_TOKEN`: bot token from @BotFather
//! - `API_URL`: base URL of the finance API
//!
//! # Commands
//!
//! - `/start` - Welcome message and usage
//! - `+100 salario, renda` / `-50 pizza, lazer` - Register a transaction
//! - `/desfazer` - Undo the last transaction
//! - `/resumo [period]` - Summary, monthly by default
//! - `/buscar <termo>` - Search transactions by description
//! - `/categorias` - List categories
//! - `/addcategoria <nome>` / `/rmvcategoria <nome>` - Manage categories
//! - `/relatorio <mensal|anual|categorias>` - PDF report

pub mod bot;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod handlers;
pub mod report;

pub use bot::FinanceBot;
pub use config::BotConfig;
pub use dispatch::Reply;
pub use error::{BotError, Result};
pub use handlers::Command;

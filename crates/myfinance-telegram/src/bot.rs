//! Main bot wiring: dispatcher tree and polling loop.

use std::sync::Arc;

use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use tracing::{debug, info, warn};

use myfinance_api::ApiClient;

use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::handlers::{self, Command};

/// The MyFinance Telegram bot.
pub struct FinanceBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Finance API client shared across handlers.
    api: Arc<ApiClient>,
}

impl FinanceBot {
    /// Creates the bot from configuration.
    pub fn new(config: &BotConfig) -> Result<Self> {
        let bot = Bot::new(config.telegram_token.clone());
        let api = Arc::new(ApiClient::new(config.api_url.clone())?);

        Ok(Self { bot, api })
    }

    /// Gets the bot's username, verifying the token in the process.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::StartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Runs the bot in long-polling mode until interrupted.
    pub async fn start_polling(&self) {
        let api_for_commands = Arc::clone(&self.api);
        let api_for_text = Arc::clone(&self.api);

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let api = Arc::clone(&api_for_commands);
                        async move { handlers::handle_command(bot, msg, cmd, api).await }
                    }),
            )
            .branch(
                // Unrecognized slash-commands are dropped on purpose: the
                // dispatch table treats them like any other unmatched text.
                Update::filter_message()
                    .filter(|msg: Message| {
                        msg.text().map(|t| t.starts_with('/')).unwrap_or(false)
                    })
                    .endpoint(|msg: Message| async move {
                        debug!(chat_id = %msg.chat.id, text = ?msg.text(), "ignoring unrecognized command");
                        respond(())
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| {
                        msg.text().map(|t| !t.starts_with('/')).unwrap_or(false)
                    })
                    .endpoint(move |bot: Bot, msg: Message| {
                        let api = Arc::clone(&api_for_text);
                        async move { handlers::handle_text(bot, msg, api).await }
                    }),
            );

        info!("Bot is running! Send /start to begin.");

        Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                warn!("Unhandled update: {:?}", upd);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

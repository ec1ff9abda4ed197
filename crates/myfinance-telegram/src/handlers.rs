//! Teloxide-facing handlers: command parsing and reply delivery.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatAction, InputFile, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, warn};

use myfinance_api::ApiClient;

use crate::dispatch::{self, Reply};
use crate::format;
use crate::report;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Comandos disponíveis:")]
pub enum Command {
    #[command(description = "Mensagem de boas-vindas e ajuda")]
    Start,

    #[command(description = "Desfaz a última transação")]
    Desfazer,

    #[command(description = "Resumo do período: /resumo [monthly|annual]")]
    Resumo(String),

    #[command(description = "Busca transações: /buscar <descrição>")]
    Buscar(String),

    #[command(description = "Lista suas categorias")]
    Categorias,

    #[command(description = "Adiciona uma categoria: /addcategoria <nome>")]
    AddCategoria(String),

    #[command(description = "Remove uma categoria: /rmvcategoria <nome>")]
    RmvCategoria(String),

    #[command(description = "Gera um relatório em PDF: /relatorio <mensal|anual|categorias>")]
    Relatorio(String),
}

/// Handles a parsed command.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    api: Arc<ApiClient>,
) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let telegram_id = user.id.0 as i64;
    debug!(chat_id = %msg.chat.id, telegram_id, ?cmd, "command received");

    let reply = dispatch::dispatch_command(api.as_ref(), telegram_id, &cmd).await;
    send_reply(&bot, msg.chat.id, reply).await
}

/// Handles a free-text message (transaction registration or silence).
pub async fn handle_text(bot: Bot, msg: Message, api: Arc<ApiClient>) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let telegram_id = user.id.0 as i64;

    let reply = dispatch::dispatch_text(api.as_ref(), telegram_id, text).await;
    send_reply(&bot, msg.chat.id, reply).await
}

/// Delivers one reply to the chat.
///
/// Report uploads spool the payload to a uniquely named temp file whose
/// handle is dropped once the upload attempt completes, removing the file
/// on the success and failure paths alike.
async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    match reply {
        Reply::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Reply::Markdown(text) => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Reply::Document {
            filename,
            caption,
            payload,
        } => {
            let _ = bot
                .send_chat_action(chat_id, ChatAction::UploadDocument)
                .await;

            let spooled = match report::spool_report(&payload) {
                Ok(file) => file,
                Err(e) => {
                    error!(error = %e, "failed to spool report to a temp file");
                    bot.send_message(chat_id, format::INTERNAL_ERROR).await?;
                    return Ok(());
                }
            };

            let document = InputFile::file(spooled.path().to_owned()).file_name(filename);
            let sent = bot.send_document(chat_id, document).caption(caption).await;
            drop(spooled);

            if let Err(e) = sent {
                warn!(chat_id = %chat_id, error = %e, "failed to upload report");
                bot.send_message(chat_id, format::INTERNAL_ERROR).await?;
            }
        }
        Reply::None => {}
    }
    Ok(())
}

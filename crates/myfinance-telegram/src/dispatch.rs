//! Command-to-API dispatch.
//!
//! Each inbound message resolves to exactly one [`Reply`]. API rejections
//! map to per-endpoint messages and transport faults to a generic error;
//! the only silent case is free text that is not a transaction.

use bytes::Bytes;
use tracing::{debug, error};

use myfinance_api::{ApiError, ApiOutcome, FinanceApi, StatusCode};
use myfinance_models::ReportKind;

use crate::format;
use crate::handlers::Command;

/// Period used when `/resumo` is called without an argument.
pub const DEFAULT_PERIOD: &str = "monthly";

/// What the bot sends back for one inbound message.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Plain text message.
    Text(String),

    /// Markdown-formatted message.
    Markdown(String),

    /// PDF document upload.
    Document {
        filename: String,
        caption: String,
        payload: Bytes,
    },

    /// Deliberate silence (unmatched free text).
    None,
}

/// Routes a parsed command to its API call and formatter.
pub async fn dispatch_command(api: &dyn FinanceApi, telegram_id: i64, command: &Command) -> Reply {
    match command {
        Command::Start => Reply::Markdown(format::WELCOME.to_string()),
        Command::Desfazer => undo(api, telegram_id).await,
        Command::Resumo(period) => summary(api, telegram_id, period).await,
        Command::Buscar(terms) => search(api, telegram_id, terms).await,
        Command::Categorias => categories(api, telegram_id).await,
        Command::AddCategoria(name) => add_category(api, telegram_id, name).await,
        Command::RmvCategoria(name) => remove_category(api, telegram_id, name).await,
        Command::Relatorio(kind) => report(api, telegram_id, kind).await,
    }
}

/// Routes free text. Messages starting with `+` or `-` register a
/// transaction; everything else is deliberately left unanswered.
pub async fn dispatch_text(api: &dyn FinanceApi, telegram_id: i64, text: &str) -> Reply {
    let text = text.trim();
    if text.starts_with('+') || text.starts_with('-') {
        register(api, telegram_id, text).await
    } else {
        debug!(telegram_id, "ignoring non-transaction text");
        Reply::None
    }
}

async fn register(api: &dyn FinanceApi, telegram_id: i64, text: &str) -> Reply {
    match api.register_transaction(telegram_id, text).await {
        Ok(ApiOutcome::Success(tx)) => Reply::Markdown(format::transaction_registered(&tx)),
        Ok(ApiOutcome::Rejected(_)) => Reply::Markdown(format::TRANSACTION_REJECTED.to_string()),
        Err(e) => internal_error("register transaction", e),
    }
}

async fn undo(api: &dyn FinanceApi, telegram_id: i64) -> Reply {
    match api.undo_last_transaction(telegram_id).await {
        Ok(ApiOutcome::Success(tx)) => Reply::Markdown(format::transaction_undone(&tx)),
        Ok(ApiOutcome::Rejected(_)) => Reply::Text(format::NOTHING_TO_UNDO.to_string()),
        Err(e) => internal_error("undo transaction", e),
    }
}

async fn summary(api: &dyn FinanceApi, telegram_id: i64, period_arg: &str) -> Reply {
    let period = period_arg.split_whitespace().next().unwrap_or(DEFAULT_PERIOD);

    match api.summary(telegram_id, period).await {
        Ok(ApiOutcome::Success(totals)) => Reply::Markdown(format::summary(period, &totals)),
        Ok(ApiOutcome::Rejected(_)) => Reply::Text(format::SUMMARY_FAILED.to_string()),
        Err(e) => internal_error("fetch summary", e),
    }
}

async fn search(api: &dyn FinanceApi, telegram_id: i64, terms: &str) -> Reply {
    let query = terms.split_whitespace().collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        return Reply::Markdown(format::SEARCH_USAGE.to_string());
    }

    match api.search(telegram_id, &query).await {
        Ok(ApiOutcome::Success(records)) if records.is_empty() => {
            Reply::Text(format::SEARCH_EMPTY.to_string())
        }
        Ok(ApiOutcome::Success(records)) => {
            Reply::Markdown(format::search_results(&query, &records))
        }
        Ok(ApiOutcome::Rejected(_)) => Reply::Text(format::SEARCH_FAILED.to_string()),
        Err(e) => internal_error("search transactions", e),
    }
}

async fn categories(api: &dyn FinanceApi, telegram_id: i64) -> Reply {
    match api.categories(telegram_id).await {
        Ok(ApiOutcome::Success(categories)) => {
            Reply::Markdown(format::category_list(&categories))
        }
        Ok(ApiOutcome::Rejected(_)) => Reply::Text(format::CATEGORIES_FAILED.to_string()),
        Err(e) => internal_error("list categories", e),
    }
}

async fn add_category(api: &dyn FinanceApi, telegram_id: i64, args: &str) -> Reply {
    let Some(name) = args.split_whitespace().next() else {
        return Reply::Markdown(format::ADD_CATEGORY_USAGE.to_string());
    };

    match api.add_category(telegram_id, name).await {
        Ok(ApiOutcome::Success(())) => Reply::Markdown(format::category_added(name)),
        Ok(ApiOutcome::Rejected(_)) => Reply::Text(format::CATEGORY_ADD_REJECTED.to_string()),
        Err(e) => internal_error("add category", e),
    }
}

async fn remove_category(api: &dyn FinanceApi, telegram_id: i64, args: &str) -> Reply {
    let Some(name) = args.split_whitespace().next() else {
        return Reply::Markdown(format::REMOVE_CATEGORY_USAGE.to_string());
    };

    match api.remove_category(telegram_id, name).await {
        Ok(ApiOutcome::Success(())) => Reply::Markdown(format::category_removed(name)),
        Ok(ApiOutcome::Rejected(_)) => Reply::Text(format::CATEGORY_REMOVE_REJECTED.to_string()),
        Err(e) => internal_error("remove category", e),
    }
}

async fn report(api: &dyn FinanceApi, telegram_id: i64, args: &str) -> Reply {
    let Some(arg) = args.split_whitespace().next() else {
        return Reply::Markdown(format::REPORT_USAGE.to_string());
    };
    let Some(kind) = ReportKind::from_arg(arg) else {
        return Reply::Text(format::REPORT_INVALID_KIND.to_string());
    };

    match api.fetch_report(telegram_id, kind).await {
        Ok(ApiOutcome::Success(payload)) => Reply::Document {
            filename: format::report_file_name(kind),
            caption: format::report_caption(kind),
            payload,
        },
        Ok(ApiOutcome::Rejected(StatusCode::NOT_FOUND)) => {
            Reply::Text(format::REPORT_ROUTE_MISSING.to_string())
        }
        Ok(ApiOutcome::Rejected(status)) => Reply::Text(format::report_failed(status.as_u16())),
        Err(e) => internal_error("fetch report", e),
    }
}

fn internal_error(operation: &str, error: ApiError) -> Reply {
    error!(%error, operation, "finance API call failed");
    Reply::Text(format::INTERNAL_ERROR.to_string())
}

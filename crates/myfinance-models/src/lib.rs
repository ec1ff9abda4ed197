//! Core data models for the MyFinance bot.
//!
//! These types mirror the wire contracts of the finance backend: transaction
//! receipts, search records, period summaries, and the report vocabulary.
//! Everything here is request-scoped; nothing is persisted by the bot.

pub mod report;
pub mod summary;
pub mod transaction;

pub use report::ReportKind;
pub use summary::Summary;
pub use transaction::{
    DeletedTransaction, RegisteredTransaction, TransactionKind, TransactionRecord,
};

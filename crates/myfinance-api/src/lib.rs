//! HTTP client for the MyFinance backend API.
//!
//! The backend owns all financial data and business logic; this crate only
//! issues requests and decodes responses. Ordinary API rejections (any
//! non-200 status) are surfaced as [`ApiOutcome::Rejected`] so each caller
//! can pick its own user-facing message; only transport and decode faults
//! are errors. One attempt per request, no retries.

pub mod client;
pub mod error;

pub use client::{ApiClient, ApiOutcome, FinanceApi, REQUEST_TIMEOUT_SECS};
pub use error::{ApiError, Result};

pub use reqwest::StatusCode;

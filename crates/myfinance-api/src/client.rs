//! The finance API client and the trait seam used by the dispatcher.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use myfinance_models::{
    DeletedTransaction, RegisteredTransaction, ReportKind, Summary, TransactionRecord,
};

use crate::error::Result;

/// Fixed request timeout. Exceeding it is a transport fault surfaced to the
/// user as a generic error; there is no retry.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Outcome of a well-formed API request.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    /// 200 with a decoded payload.
    Success(T),

    /// Any non-200 status. Each endpoint maps it to its own user-facing
    /// message.
    Rejected(StatusCode),
}

/// The finance backend as seen by the dispatcher.
///
/// One method per backend operation. The HTTP implementation is
/// [`ApiClient`]; dispatcher tests substitute a recording fake.
#[async_trait]
pub trait FinanceApi: Send + Sync {
    /// `POST /transactions/` with the raw chat text as the message payload.
    async fn register_transaction(
        &self,
        telegram_id: i64,
        message: &str,
    ) -> Result<ApiOutcome<RegisteredTransaction>>;

    /// `DELETE /transactions/last` for the user.
    async fn undo_last_transaction(
        &self,
        telegram_id: i64,
    ) -> Result<ApiOutcome<DeletedTransaction>>;

    /// `GET /summary/` for the given period.
    async fn summary(&self, telegram_id: i64, period: &str) -> Result<ApiOutcome<Summary>>;

    /// `GET /search/` by description.
    async fn search(
        &self,
        telegram_id: i64,
        description: &str,
    ) -> Result<ApiOutcome<Vec<TransactionRecord>>>;

    /// `GET /categories/` for the user.
    async fn categories(&self, telegram_id: i64) -> Result<ApiOutcome<Vec<String>>>;

    /// `POST /categories/add` with the category name.
    async fn add_category(&self, telegram_id: i64, name: &str) -> Result<ApiOutcome<()>>;

    /// `DELETE /categories/remove` with the category name.
    async fn remove_category(&self, telegram_id: i64, name: &str) -> Result<ApiOutcome<()>>;

    /// `GET /reports/{kind}` returning the raw PDF payload.
    async fn fetch_report(&self, telegram_id: i64, kind: ReportKind)
        -> Result<ApiOutcome<Bytes>>;
}

/// Wire shape of the undo endpoint response.
#[derive(Debug, Deserialize)]
struct UndoResponse {
    deleted_transaction: DeletedTransaction,
}

/// HTTP client for the finance API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues one request and returns the raw status and body.
    ///
    /// GET/DELETE carry parameters in the query string; POST carries an
    /// optional JSON body and may also carry query parameters.
    async fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<(StatusCode, Bytes)> {
        let url = self.url(path);
        debug!(%method, %url, "calling finance API");

        let mut request = self.http.request(method, &url).query(query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload = response.bytes().await?;
        Ok((status, payload))
    }

    /// Decodes a JSON payload on 200, passes every other status through.
    fn decode<T: serde::de::DeserializeOwned>(
        (status, payload): (StatusCode, Bytes),
    ) -> Result<ApiOutcome<T>> {
        if status != StatusCode::OK {
            return Ok(ApiOutcome::Rejected(status));
        }
        Ok(ApiOutcome::Success(serde_json::from_slice(&payload)?))
    }
}

#[async_trait]
impl FinanceApi for ApiClient {
    async fn register_transaction(
        &self,
        telegram_id: i64,
        message: &str,
    ) -> Result<ApiOutcome<RegisteredTransaction>> {
        let body = json!({ "telegram_id": telegram_id, "message": message });
        let reply = self
            .call(Method::POST, "/transactions/", &[], Some(&body))
            .await?;
        Self::decode(reply)
    }

    async fn undo_last_transaction(
        &self,
        telegram_id: i64,
    ) -> Result<ApiOutcome<DeletedTransaction>> {
        let query = [("telegram_id", telegram_id.to_string())];
        let reply = self
            .call(Method::DELETE, "/transactions/last", &query, None)
            .await?;

        Ok(match Self::decode::<UndoResponse>(reply)? {
            ApiOutcome::Success(undo) => ApiOutcome::Success(undo.deleted_transaction),
            ApiOutcome::Rejected(status) => ApiOutcome::Rejected(status),
        })
    }

    async fn summary(&self, telegram_id: i64, period: &str) -> Result<ApiOutcome<Summary>> {
        let query = [
            ("telegram_id", telegram_id.to_string()),
            ("period", period.to_string()),
        ];
        let reply = self.call(Method::GET, "/summary/", &query, None).await?;
        Self::decode(reply)
    }

    async fn search(
        &self,
        telegram_id: i64,
        description: &str,
    ) -> Result<ApiOutcome<Vec<TransactionRecord>>> {
        let query = [
            ("telegram_id", telegram_id.to_string()),
            ("description", description.to_string()),
        ];
        let reply = self.call(Method::GET, "/search/", &query, None).await?;
        Self::decode(reply)
    }

    async fn categories(&self, telegram_id: i64) -> Result<ApiOutcome<Vec<String>>> {
        let query = [("telegram_id", telegram_id.to_string())];
        let reply = self.call(Method::GET, "/categories/", &query, None).await?;
        Self::decode(reply)
    }

    async fn add_category(&self, telegram_id: i64, name: &str) -> Result<ApiOutcome<()>> {
        let query = [
            ("telegram_id", telegram_id.to_string()),
            ("name", name.to_string()),
        ];
        let (status, _payload) = self
            .call(Method::POST, "/categories/add", &query, None)
            .await?;

        Ok(if status == StatusCode::OK {
            ApiOutcome::Success(())
        } else {
            ApiOutcome::Rejected(status)
        })
    }

    async fn remove_category(&self, telegram_id: i64, name: &str) -> Result<ApiOutcome<()>> {
        let query = [
            ("telegram_id", telegram_id.to_string()),
            ("name", name.to_string()),
        ];
        let (status, _payload) = self
            .call(Method::DELETE, "/categories/remove", &query, None)
            .await?;

        Ok(if status == StatusCode::OK {
            ApiOutcome::Success(())
        } else {
            ApiOutcome::Rejected(status)
        })
    }

    async fn fetch_report(
        &self,
        telegram_id: i64,
        kind: ReportKind,
    ) -> Result<ApiOutcome<Bytes>> {
        let query = [("telegram_id", telegram_id.to_string())];
        let (status, payload) = self
            .call(Method::GET, kind.endpoint_path(), &query, None)
            .await?;

        Ok(if status == StatusCode::OK {
            ApiOutcome::Success(payload)
        } else {
            ApiOutcome::Rejected(status)
        })
    }
}

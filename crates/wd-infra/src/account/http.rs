//! HTTP account service adapter
//!
//! Implements the account port against the wallet platform's REST API.
//! Failure responses are folded into a single diagnostic message that
//! embeds the numeric status ("Request failed: 409 Conflict"), which is
//! the shape the flow's error classification expects.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use wd_core::ports::{AccountPort, AccountServiceError};

/// HTTP client for the wallet platform's account endpoint.
pub struct HttpAccountService {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountRequest<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
}

/// Error body shape used by the platform API. Both fields are optional;
/// older deployments only set `error`.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl HttpAccountService {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn accounts_url(&self) -> String {
        format!("{}/accounts", self.base_url.trim_end_matches('/'))
    }

    fn status_error(status: reqwest::StatusCode, body: &[u8]) -> AccountServiceError {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .or_else(|| status.canonical_reason().map(str::to_string));

        let message = match detail {
            Some(detail) => format!("Request failed: {} {}", status.as_u16(), detail),
            None => format!("Request failed: {}", status.as_u16()),
        };
        AccountServiceError::Service(message)
    }
}

#[async_trait]
impl AccountPort for HttpAccountService {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), AccountServiceError> {
        let url = self.accounts_url();
        debug!(url = %url, "posting account creation request");

        let response = self
            .client
            .post(&url)
            .json(&CreateAccountRequest {
                email,
                password,
                full_name,
            })
            .send()
            .await
            .map_err(|err| AccountServiceError::Service(format!("Request failed: {err}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(Self::status_error(status, &body))
    }
}

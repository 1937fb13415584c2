//! HTTP implementation of [`CatalogClient`] using [`reqwest`].
//!
//! Requests go to `{base}/character?page={n}` for the listing and
//! `{base}/character/?name={q}&page={n}` for name search. Failures are first
//! captured as a typed [`ClientError`] and then flattened into the
//! [`ApiError`] value the application stores.

use crate::api::client::CatalogClient;
use crate::domain::error::{Result as CrateResult, RickdexError, GENERIC_ERROR_MESSAGE};
use crate::domain::{ApiError, CatalogPage};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// Errors from the HTTP transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request produced no response (connection, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A 2xx response whose body is not a catalog page.
    #[error("failed to decode catalog page: {0}")]
    Decode(#[source] reqwest::Error),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(_) => ApiError::network(),
            ClientError::Status { status, body } => {
                let message = extract_error_message(&body)
                    .unwrap_or_else(|| format!("Request failed with status code {status}"));
                ApiError::response(status, message)
            }
            ClientError::Decode(_) | ClientError::InvalidRequest(_) => {
                ApiError::other(GENERIC_ERROR_MESSAGE)
            }
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pulls the `error` field out of a JSON failure body, if there is one.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.is_empty())
}

/// URL of a listing page.
///
/// # Errors
///
/// Returns [`ClientError::InvalidRequest`] if `base_url` is not a valid URL.
pub fn list_url(base_url: &str, page: u32) -> Result<Url, ClientError> {
    let mut url = parse_endpoint(base_url, "character")?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}

/// URL of a name-search page. `name` is percent-encoded.
///
/// # Errors
///
/// Returns [`ClientError::InvalidRequest`] if `base_url` is not a valid URL.
pub fn search_url(base_url: &str, name: &str, page: u32) -> Result<Url, ClientError> {
    let mut url = parse_endpoint(base_url, "character/")?;
    url.query_pairs_mut()
        .append_pair("name", name)
        .append_pair("page", &page.to_string());
    Ok(url)
}

fn parse_endpoint(base_url: &str, path: &str) -> Result<Url, ClientError> {
    let joined = format!("{}/{path}", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| ClientError::InvalidRequest(format!("{joined}: {e}")))
}

/// HTTP client for the character API.
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RickdexError::Http`] if the underlying client cannot be built
    /// or [`RickdexError::Config`] if `base_url` does not parse.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> CrateResult<Self> {
        let base_url = base_url.into();
        list_url(&base_url, 1).map_err(|e| RickdexError::Config(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RickdexError::Http(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL requests are built from.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_page(&self, url: Url) -> Result<CatalogPage, ClientError> {
        tracing::debug!(url = %url, "requesting catalog page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let response = Self::ensure_success(response).await?;
        response.json::<CatalogPage>().await.map_err(ClientError::Decode)
    }

    /// Returns the response unchanged on a 2xx status, or a
    /// [`ClientError::Status`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_page(&self, page: u32) -> Result<CatalogPage, ApiError> {
        let url = list_url(&self.base_url, page)?;
        self.get_page(url).await.map_err(|e| {
            tracing::debug!(page, error = %e, "listing request failed");
            ApiError::from(e)
        })
    }

    async fn search_page(&self, name: &str, page: u32) -> Result<CatalogPage, ApiError> {
        let url = search_url(&self.base_url, name, page)?;
        self.get_page(url).await.map_err(|e| {
            tracing::debug!(page, name, error = %e, "search request failed");
            ApiError::from(e)
        })
    }
}

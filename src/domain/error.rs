//! Error types for rickdex.
//!
//! This module defines the crate-wide error type [`RickdexError`] with its
//! [`Result`] alias, and [`ApiError`], the plain data error that failed catalog
//! fetches carry into application state. All error enums use `thiserror`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - no response received";

/// Message used for failures that are neither transport nor status errors.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch data";

/// The main error type for rickdex operations.
///
/// Covers storage, I/O, serialization and configuration failures. Catalog fetch
/// failures are not represented here: they travel as [`ApiError`] values and end
/// up in the catalog state instead of being returned to callers.
///
/// # Examples
///
/// ```
/// use rickdex::domain::RickdexError;
///
/// fn validate(url: &str) -> Result<(), RickdexError> {
///     if url.is_empty() {
///         return Err(RickdexError::Config("api_base_url is empty".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum RickdexError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the storage backend fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),
}

/// A specialized `Result` type for rickdex operations.
pub type Result<T> = std::result::Result<T, RickdexError>;

/// Failure of a catalog request, as stored in the catalog state.
///
/// `status` is present only when the remote answered with a non-2xx status.
/// Transport failures (no response) and any other failure leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description, from the server body when available.
    pub message: String,

    /// HTTP status code of the failed response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    /// Error for a response the server answered with a failure status.
    pub fn response(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Error for a request that never got a response.
    #[must_use]
    pub fn network() -> Self {
        Self {
            message: NETWORK_ERROR_MESSAGE.to_string(),
            status: None,
        }
    }

    /// Error for anything else (bad input, undecodable body).
    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: if message.is_empty() {
                GENERIC_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            status: None,
        }
    }
}

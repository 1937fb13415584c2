//! Remote catalog access.
//!
//! - `client`: the [`CatalogClient`] trait the application depends on
//! - `http`: [`HttpCatalogClient`], the reqwest-backed implementation

pub mod client;
pub mod http;

pub use client::CatalogClient;
pub use http::{ClientError, HttpCatalogClient};

//! Catalog client abstraction.

use crate::domain::{ApiError, CatalogPage};
use async_trait::async_trait;

/// Source of catalog pages.
///
/// Both operations resolve to a whole page or an [`ApiError`]; implementations
/// never retry and never cache. The trait is object safe so application code can
/// hold it behind an `Arc`.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches page `page` (1-based) of the unfiltered listing.
    async fn list_page(&self, page: u32) -> Result<CatalogPage, ApiError>;

    /// Fetches page `page` of the characters whose name matches `name`.
    async fn search_page(&self, name: &str, page: u32) -> Result<CatalogPage, ApiError>;
}

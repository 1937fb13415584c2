//! Catalog query state.
//!
//! [`CatalogState`] tracks which page of which query the user is looking at and
//! the lifecycle of the fetch that backs it. It performs no I/O: a fetch is
//! started with [`CatalogState::begin_fetch`], which hands back a
//! [`FetchRequest`] for the caller to execute, and finished with
//! [`CatalogState::apply_fetch`].
//!
//! Every request carries a generation number. Only the newest generation may
//! change state; a slower, older request that resolves later is ignored.

use crate::domain::{ApiError, CatalogPage, Character};

/// A fetch the caller must perform and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Page to fetch (1-based).
    pub page: u32,
    /// Name filter, `None` for the unfiltered listing.
    pub query: Option<String>,
    /// Issue order of this request.
    pub generation: u64,
}

/// State of the catalog browser.
#[derive(Debug, Clone)]
pub struct CatalogState {
    characters: Vec<Character>,
    loading: bool,
    error: Option<ApiError>,
    current_page: u32,
    total_pages: u32,
    total_items: u32,
    search_query: String,
    generation: u64,
    /// Page whose results are currently in `characters`.
    shown_page: Option<u32>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            characters: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            search_query: String::new(),
            generation: 0,
            shown_page: None,
        }
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn total_items(&self) -> u32 {
        self.total_items
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Generation of the most recently issued fetch.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether page 1 of the current query is on screen or being fetched.
    #[must_use]
    pub fn has_first_page_or_pending(&self) -> bool {
        self.loading || self.shown_page == Some(1)
    }

    /// Starts a new query: back to page 1 with no results, marked loading.
    ///
    /// Does not fetch; pair it with [`begin_fetch`](Self::begin_fetch)`(1)`.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
        self.characters.clear();
        self.shown_page = None;
        self.loading = true;
        tracing::debug!(query = %self.search_query, "search query set");
    }

    /// Moves to page `page` if the move is allowed.
    ///
    /// Rejected (returns `false`, nothing changes) when `page` is outside
    /// `1..=total_pages`, equals the current page, or a fetch is in flight.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages || page == self.current_page || self.loading {
            tracing::debug!(
                page,
                current = self.current_page,
                total = self.total_pages,
                loading = self.loading,
                "page change rejected"
            );
            return false;
        }
        self.current_page = page;
        true
    }

    /// Back to page 1 with no results, keeping the query.
    pub fn refresh(&mut self) {
        self.current_page = 1;
        self.characters.clear();
        self.shown_page = None;
    }

    /// Marks a fetch of `page` as in flight and returns what to request.
    pub fn begin_fetch(&mut self, page: u32) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;

        let query = (!self.search_query.is_empty()).then(|| self.search_query.clone());
        tracing::debug!(page, generation = self.generation, query = ?query, "fetch started");

        FetchRequest {
            page,
            query,
            generation: self.generation,
        }
    }

    /// Applies the outcome of `request`.
    ///
    /// Returns `false` without touching state when a newer fetch has been issued
    /// since `request`.
    pub fn apply_fetch(
        &mut self,
        request: &FetchRequest,
        result: Result<CatalogPage, ApiError>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                page = request.page,
                generation = request.generation,
                latest = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        self.loading = false;

        match result {
            Ok(page) => {
                tracing::debug!(
                    page = request.page,
                    results = page.results.len(),
                    total_pages = page.info.pages,
                    total_items = page.info.count,
                    "fetch succeeded"
                );
                self.characters = page.results;
                self.total_pages = page.info.pages;
                self.total_items = page.info.count;
                self.current_page = request.page;
                self.shown_page = Some(request.page);
                self.error = None;
            }
            Err(error) => {
                tracing::debug!(page = request.page, status = ?error.status, error = %error, "fetch failed");
                if request.page == 1 {
                    self.characters.clear();
                    self.shown_page = None;
                    self.current_page = 1;
                } else {
                    // Keep the page number in line with the results still shown.
                    self.current_page = self.shown_page.unwrap_or(request.page);
                }
                self.error = Some(error);
            }
        }
        true
    }
}

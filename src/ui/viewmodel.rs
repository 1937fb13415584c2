//! View model types representing renderable UI state.
//!
//! View models are read-only snapshots computed from [`AppState`](crate::app::AppState)
//! by its `compute_*` methods and consumed by the [`renderer`](crate::ui::renderer).
//! They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use rickdex::app::AppState;
//! use rickdex::ui::viewmodel::CatalogStatus;
//!
//! let state = AppState::default();
//! let view = state.compute_catalog_view();
//! assert_eq!(view.status, CatalogStatus::Ready);
//! assert!(view.pagination.is_none());
//! ```

use crate::app::pagination::PageItem;
use crate::domain::{CharacterStatus, FavoriteColor};

/// Title of the favorites panel.
pub const FAVORITES_TITLE: &str = "Favorite Characters";

/// Shown in the favorites panel when it has no entries.
pub const FAVORITES_EMPTY_MESSAGE: &str =
    "No favorite characters yet. Add some from the character list!";

/// Shown while the first results of a query are loading.
pub const LOADING_MESSAGE: &str = "Loading characters...";

/// Heading above a fetch error.
pub const ERROR_TITLE: &str = "Error loading characters";

/// Shown when a successful fetch returned no characters.
pub const EMPTY_RESULTS_MESSAGE: &str = "No characters found";

/// What the catalog area should show instead of, or above, the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// A fetch is running and there is nothing to show yet.
    Loading,
    /// The last fetch failed. Takes precedence over loading.
    Error {
        message: String,
        status: Option<u16>,
    },
    /// Results are shown.
    Ready,
}

/// One character in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub image: String,
    /// Whether the character is in the favorites set.
    pub is_favorite: bool,
}

/// Pager state. Absent when there is at most one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub items: Vec<PageItem>,
    pub current: u32,
    pub total: u32,
    pub can_previous: bool,
    pub can_next: bool,
    /// "Showing X-Y of Z characters".
    pub summary: Option<String>,
}

/// Everything the catalog area needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub status: CatalogStatus,
    pub cards: Vec<CharacterCard>,
    pub search_query: String,
    pub pagination: Option<PaginationView>,
}

/// Everything the favorites panel needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesView {
    /// Title including the count when non-empty.
    pub title: String,
    pub cards: Vec<CharacterCard>,
    pub color: FavoriteColor,
    pub empty_message: Option<&'static str>,
}

/// Detail panel for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub status: CharacterStatus,
    pub species: String,
    pub gender: String,
    pub origin: String,
    /// Character type, omitted when the API gives an empty string.
    pub kind: Option<String>,
    pub location: String,
    pub episode_count: usize,
    pub is_favorite: bool,
}

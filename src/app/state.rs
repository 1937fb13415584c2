//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the catalog browser and the
//! favorites panel. It is mutated only by [`handle_event`](crate::app::handle_event)
//! and read through the `compute_*` methods, which turn it into the view models of
//! [`crate::ui::viewmodel`].
//!
//! # State Components
//!
//! - **Catalog**: current query, page, results and fetch lifecycle
//! - **Favorites**: ordered favorites and accent color
//! - **Layout**: page size and pager spread used for display only
//!
//! # Example
//!
//! ```rust
//! use rickdex::app::AppState;
//!
//! let state = AppState::default();
//! let favorites = state.compute_favorites_view();
//! assert_eq!(favorites.title, "Favorite Characters");
//! assert!(favorites.empty_message.is_some());
//! ```

use crate::app::catalog::CatalogState;
use crate::app::favorites::FavoritesState;
use crate::app::pagination::{compute_visible_pages, item_range, DEFAULT_SPREAD};
use crate::domain::Character;
use crate::ui::viewmodel::{
    CatalogStatus, CatalogView, CharacterCard, CharacterDetail, FavoritesView, PaginationView,
    FAVORITES_EMPTY_MESSAGE, FAVORITES_TITLE,
};

/// Page size the character API serves.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog query and fetch lifecycle.
    pub catalog: CatalogState,

    /// Favorites collection and color, hydrated from storage at startup.
    pub favorites: FavoritesState,

    /// Items per page, used for the "Showing X-Y" summary.
    pub page_size: u32,

    /// Number of pages shown on each side of the current page.
    pub page_spread: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FavoritesState::default())
    }
}

impl AppState {
    /// Creates a state with an empty catalog and the given favorites.
    #[must_use]
    pub fn new(favorites: FavoritesState) -> Self {
        Self {
            catalog: CatalogState::new(),
            favorites,
            page_size: DEFAULT_PAGE_SIZE,
            page_spread: DEFAULT_SPREAD,
        }
    }

    /// Overrides the display layout.
    #[must_use]
    pub fn with_layout(mut self, page_size: u32, page_spread: u32) -> Self {
        self.page_size = page_size;
        self.page_spread = page_spread;
        self
    }

    /// Looks a character up among the shown results, then among favorites.
    #[must_use]
    pub fn find_character(&self, id: u32) -> Option<&Character> {
        self.catalog
            .characters()
            .iter()
            .chain(self.favorites.characters())
            .find(|c| c.id == id)
    }

    /// Computes the catalog area view model.
    #[must_use]
    pub fn compute_catalog_view(&self) -> CatalogView {
        let catalog = &self.catalog;

        let status = if let Some(error) = catalog.error() {
            CatalogStatus::Error {
                message: error.message.clone(),
                status: error.status,
            }
        } else if catalog.loading() && catalog.characters().is_empty() {
            CatalogStatus::Loading
        } else {
            CatalogStatus::Ready
        };

        let cards = catalog
            .characters()
            .iter()
            .map(|c| self.compute_card(c))
            .collect();

        CatalogView {
            status,
            cards,
            search_query: catalog.search_query().to_string(),
            pagination: self.compute_pagination(),
        }
    }

    /// Computes the pager, or `None` when there is at most one page.
    #[must_use]
    pub fn compute_pagination(&self) -> Option<PaginationView> {
        let catalog = &self.catalog;
        let total = catalog.total_pages();
        if total <= 1 {
            return None;
        }

        let current = catalog.current_page();
        let summary = item_range(current, self.page_size, catalog.total_items()).map(
            |(start, end)| {
                format!(
                    "Showing {start}-{end} of {} characters",
                    catalog.total_items()
                )
            },
        );

        Some(PaginationView {
            items: compute_visible_pages(current, total, self.page_spread),
            current,
            total,
            can_previous: current > 1 && !catalog.loading(),
            can_next: current < total && !catalog.loading(),
            summary,
        })
    }

    /// Computes the favorites panel view model.
    #[must_use]
    pub fn compute_favorites_view(&self) -> FavoritesView {
        let count = self.favorites.len();
        let (title, empty_message) = if count == 0 {
            (FAVORITES_TITLE.to_string(), Some(FAVORITES_EMPTY_MESSAGE))
        } else {
            (format!("{FAVORITES_TITLE} ({count})"), None)
        };

        FavoritesView {
            title,
            cards: self
                .favorites
                .characters()
                .iter()
                .map(|c| self.compute_card(c))
                .collect(),
            color: self.favorites.color(),
            empty_message,
        }
    }

    /// Computes the detail view for character `id`, if it is known.
    #[must_use]
    pub fn compute_detail(&self, id: u32) -> Option<CharacterDetail> {
        let character = self.find_character(id)?;
        Some(CharacterDetail {
            id: character.id,
            name: character.name.clone(),
            image: character.image.clone(),
            status: character.status,
            species: character.species.clone(),
            gender: character.gender.clone(),
            origin: character.origin.name.clone(),
            kind: (!character.kind.is_empty()).then(|| character.kind.clone()),
            location: character.location.name.clone(),
            episode_count: character.episode.len(),
            is_favorite: self.favorites.contains(character.id),
        })
    }

    fn compute_card(&self, character: &Character) -> CharacterCard {
        CharacterCard {
            id: character.id,
            name: character.name.clone(),
            status: character.status,
            species: character.species.clone(),
            image: character.image.clone(),
            is_favorite: self.favorites.contains(character.id),
        }
    }
}

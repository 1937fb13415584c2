//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user intents and fetch
//! completions into state changes and action sequences. It is the only place
//! where [`AppState`] is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the driver or from a finished fetch
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `CatalogState` / `FavoritesState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Catalog**: `LoadInitial`, `Search`, `GoToPage`, `NextPage`,
//!   `PreviousPage`, `Refresh`, `FetchPage`
//! - **Fetch lifecycle**: `FetchSettled`
//! - **Favorites**: `ToggleFavorite`, `AddFavorite`, `RemoveFavorite`,
//!   `ClearFavorites`, `SetFavoriteColor`
//!
//! # Example
//!
//! ```rust
//! use rickdex::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::LoadInitial);
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(r)] if r.page == 1));
//! ```

use crate::app::catalog::FetchRequest;
use crate::app::favorites::FavoriteChange;
use crate::app::{Action, AppState};
use crate::domain::{ApiError, CatalogPage, Character, FavoriteColor};

/// Events triggered by user intent or by a completed fetch.
///
/// Each event is a discrete occurrence processed to completion before the next
/// one, so state transitions are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Fetches page 1 of the current query.
    LoadInitial,

    /// Replaces the name filter and fetches its first page.
    ///
    /// An empty string returns to the unfiltered listing.
    Search(String),

    /// Jumps to a page and fetches it, if the jump is allowed.
    GoToPage(u32),

    /// Moves one page forward, if allowed.
    NextPage,

    /// Moves one page back, if allowed.
    PreviousPage,

    /// Returns to page 1 of the current query and fetches it again.
    Refresh,

    /// Fetches a page with no navigation guard.
    ///
    /// Lower level than `GoToPage`; `current_page` changes only once the fetch
    /// succeeds.
    FetchPage(u32),

    /// Reports the outcome of a fetch started by [`Action::Fetch`].
    FetchSettled {
        /// The request as it was issued.
        request: FetchRequest,
        /// Page on success, typed error otherwise.
        result: Result<CatalogPage, ApiError>,
    },

    /// Adds the character to favorites, or removes it if already there.
    ToggleFavorite(Character),

    /// Adds the character to favorites unless already present.
    AddFavorite(Character),

    /// Removes the favorite with the same id as the character.
    RemoveFavorite(Character),

    /// Removes every favorite.
    ClearFavorites,

    /// Changes the favorites accent color.
    SetFavoriteColor(FavoriteColor),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether anything visible changed, and the side
/// effects to run in order. Rejected navigation and stale fetch results return
/// `(false, vec![])`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::LoadInitial => {
            let request = state.catalog.begin_fetch(1);
            (true, vec![Action::Fetch(request)])
        }
        Event::Search(query) => {
            if query == state.catalog.search_query()
                && state.catalog.current_page() == 1
                && state.catalog.has_first_page_or_pending()
            {
                tracing::debug!(query = %query, "search unchanged, skipping fetch");
                return (false, vec![]);
            }
            state.catalog.set_search_query(query.clone());
            let request = state.catalog.begin_fetch(1);
            (true, vec![Action::Fetch(request)])
        }
        Event::GoToPage(page) => navigate(state, *page),
        Event::NextPage => {
            let target = state.catalog.current_page().saturating_add(1);
            navigate(state, target)
        }
        Event::PreviousPage => {
            let target = state.catalog.current_page().saturating_sub(1);
            navigate(state, target)
        }
        Event::Refresh => {
            state.catalog.refresh();
            let request = state.catalog.begin_fetch(1);
            (true, vec![Action::Fetch(request)])
        }
        Event::FetchPage(page) => {
            if *page == 0 {
                tracing::debug!("ignoring fetch of page 0");
                return (false, vec![]);
            }
            let request = state.catalog.begin_fetch(*page);
            (true, vec![Action::Fetch(request)])
        }
        Event::FetchSettled { request, result } => {
            let applied = state.catalog.apply_fetch(request, result.clone());
            (applied, vec![])
        }
        Event::ToggleFavorite(character) => {
            let change = state.favorites.toggle(character.clone());
            tracing::debug!(id = character.id, change = ?change, "favorite toggled");
            if change == FavoriteChange::Added {
                tracing::info!(id = character.id, name = %character.name, "added to favorites");
            }
            persist_favorites(state)
        }
        Event::AddFavorite(character) => {
            if !state.favorites.add(character.clone()) {
                return (false, vec![]);
            }
            tracing::debug!(id = character.id, "favorite added");
            persist_favorites(state)
        }
        Event::RemoveFavorite(character) => {
            if !state.favorites.remove(character.id) {
                return (false, vec![]);
            }
            tracing::debug!(id = character.id, "favorite removed");
            persist_favorites(state)
        }
        Event::ClearFavorites => {
            if !state.favorites.clear() {
                return (false, vec![]);
            }
            tracing::debug!("favorites cleared");
            persist_favorites(state)
        }
        Event::SetFavoriteColor(color) => {
            if !state.favorites.set_color(*color) {
                return (false, vec![]);
            }
            tracing::debug!(color = %color, "favorite color changed");
            (true, vec![Action::PersistColor(*color)])
        }
    }
}

fn navigate(state: &mut AppState, page: u32) -> (bool, Vec<Action>) {
    if !state.catalog.go_to_page(page) {
        return (false, vec![]);
    }
    let request = state.catalog.begin_fetch(page);
    (true, vec![Action::Fetch(request)])
}

fn persist_favorites(state: &AppState) -> (bool, Vec<Action>) {
    (
        true,
        vec![Action::PersistFavorites(state.favorites.characters().to_vec())],
    )
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::LoadInitial => "load_initial",
        Event::Search(_) => "search",
        Event::GoToPage(_) => "go_to_page",
        Event::NextPage => "next_page",
        Event::PreviousPage => "previous_page",
        Event::Refresh => "refresh",
        Event::FetchPage(_) => "fetch_page",
        Event::FetchSettled { .. } => "fetch_settled",
        Event::ToggleFavorite(_) => "toggle_favorite",
        Event::AddFavorite(_) => "add_favorite",
        Event::RemoveFavorite(_) => "remove_favorite",
        Event::ClearFavorites => "clear_favorites",
        Event::SetFavoriteColor(_) => "set_favorite_color",
    }
}

//! Actions representing side effects to be executed by the [`Store`](crate::app::Store).
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` describing
//! what has to happen next, and the store executes those actions in order:
//! favorites writes run synchronously before the next event is handled, fetches
//! are spawned and report back as [`Event::FetchSettled`](crate::app::Event::FetchSettled).
//!
//! # Example
//!
//! ```rust
//! use rickdex::app::{Action, CatalogState};
//!
//! let mut catalog = CatalogState::new();
//! let actions = vec![Action::Fetch(catalog.begin_fetch(1))];
//! assert!(matches!(actions[0], Action::Fetch(ref r) if r.page == 1));
//! ```

use crate::app::catalog::FetchRequest;
use crate::domain::{Character, FavoriteColor};

/// Side effects produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Requests a catalog page from the remote client.
    ///
    /// The result is fed back into the handler tagged with the same request,
    /// so stale answers can be recognised.
    Fetch(FetchRequest),

    /// Writes the full favorites collection, in order, to storage.
    PersistFavorites(Vec<Character>),

    /// Writes the favorites accent color to storage.
    PersistColor(FavoriteColor),
}

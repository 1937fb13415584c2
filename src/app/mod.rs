//! Application layer coordinating state, events, and actions.
//!
//! This module holds the client-side synchronization logic: it reconciles user
//! intent (navigation, search text, favorite toggles) with a remote paginated
//! catalog and a local durable store.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └─────────── Fetch results ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`catalog`]: Catalog query state and fetch lifecycle
//! - [`debounce`]: Trailing-edge debouncer for search input
//! - [`favorites`]: In-memory favorites collection
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`pagination`]: Visible page sequence computation
//! - [`state`]: Central application state container and view model computation
//! - [`store`]: Dispatch container executing actions against client and storage
//!
//! # Example
//!
//! ```rust
//! use rickdex::app::{handle_event, AppState, Event};
//! use rickdex::domain::Character;
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::ToggleFavorite(Character::new(1, "Rick")));
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! ```

pub mod actions;
pub mod catalog;
pub mod debounce;
pub mod favorites;
pub mod handler;
pub mod pagination;
pub mod state;
pub mod store;

pub use actions::Action;
pub use catalog::{CatalogState, FetchRequest};
pub use debounce::Debouncer;
pub use favorites::{FavoriteChange, FavoritesState};
pub use handler::{handle_event, Event};
pub use pagination::{compute_visible_pages, PageItem};
pub use state::AppState;
pub use store::Store;

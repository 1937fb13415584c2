//! Presentation layer.
//!
//! Turns [`AppState`](crate::app::AppState) snapshots into display-ready view
//! models and renders those as terminal text.
//!
//! ```text
//! AppState → compute_*_view → view models → Renderer → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Text renderer
//! - [`theme`]: Palette and ANSI escape sequences

pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::Renderer;
pub use theme::Theme;
pub use viewmodel::{
    CatalogStatus, CatalogView, CharacterCard, CharacterDetail, FavoritesView, PaginationView,
};

//! Domain layer for rickdex.
//!
//! Core value types shared by every other layer: the character catalog model and
//! the error types. Nothing in here performs I/O.
//!
//! # Organization
//!
//! - [`character`]: characters, catalog pages, favorite colors
//! - [`error`]: crate error, result alias and the catalog [`ApiError`]
//!
//! # Examples
//!
//! ```
//! use rickdex::domain::{CatalogPage, Character, PageInfo};
//!
//! let page = CatalogPage {
//!     info: PageInfo { count: 1, pages: 1, next: None, prev: None },
//!     results: vec![Character::new(1, "Rick Sanchez")],
//! };
//! assert_eq!(page.results[0].name, "Rick Sanchez");
//! ```

pub mod character;
pub mod error;

pub use character::{
    CatalogPage, Character, CharacterStatus, FavoriteColor, LocationRef, PageInfo, UnknownColor,
};
pub use error::{ApiError, Result, RickdexError};

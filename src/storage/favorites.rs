//! Favorites persistence on top of a [`Storage`] backend.
//!
//! Two slots are used: the favorites collection serialized as a JSON array, and
//! the accent color as a plain string. Reads never fail: a missing, unreadable or
//! malformed slot degrades to its default and is logged. Writes report errors to
//! the caller, which logs and swallows them.

use crate::app::favorites::FavoritesState;
use crate::domain::error::Result;
use crate::domain::{Character, FavoriteColor};
use crate::storage::backend::Storage;

/// Slot holding the JSON array of favorite characters.
pub const FAVORITES_KEY: &str = "rick-and-morty-favorites";

/// Slot holding the favorites accent color.
pub const COLOR_KEY: &str = "rick-and-morty-favorites-color";

/// Reads the persisted favorites, in the order they were saved.
pub fn load_favorites(storage: &dyn Storage) -> Vec<Character> {
    let raw = match storage.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read favorites, starting empty");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored favorites are malformed, starting empty");
        Vec::new()
    })
}

/// Reads the persisted color. Missing or unknown values yield red.
pub fn load_color(storage: &dyn Storage) -> FavoriteColor {
    match storage.get(COLOR_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring stored favorite color");
            FavoriteColor::default()
        }),
        Ok(None) => FavoriteColor::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read favorite color");
            FavoriteColor::default()
        }
    }
}

/// Writes the whole favorites collection.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn save_favorites(storage: &mut dyn Storage, favorites: &[Character]) -> Result<()> {
    let json = serde_json::to_string(favorites)?;
    storage.set(FAVORITES_KEY, &json)
}

/// Writes the accent color.
///
/// # Errors
///
/// Returns an error if the storage write fails.
pub fn save_color(storage: &mut dyn Storage, color: FavoriteColor) -> Result<()> {
    storage.set(COLOR_KEY, color.as_str())
}

/// Builds the in-memory favorites state from storage.
pub fn hydrate(storage: &dyn Storage) -> FavoritesState {
    let characters = load_favorites(storage);
    let color = load_color(storage);
    tracing::debug!(count = characters.len(), color = %color, "hydrated favorites");
    FavoritesState::from_characters(characters, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn empty_storage_hydrates_defaults() {
        let storage = MemoryStorage::new();
        let state = hydrate(&storage);
        assert!(state.characters().is_empty());
        assert_eq!(state.color(), FavoriteColor::Red);
    }

    #[test]
    fn saved_favorites_reload_in_order() {
        let mut storage = MemoryStorage::new();
        let favorites = vec![
            Character::new(3, "Summer Smith"),
            Character::new(1, "Rick Sanchez"),
            Character::new(2, "Morty Smith"),
        ];
        save_favorites(&mut storage, &favorites).unwrap();
        assert_eq!(load_favorites(&storage), favorites);
    }

    #[test]
    fn malformed_favorites_degrade_to_empty() {
        let storage = MemoryStorage::with_slots([(FAVORITES_KEY, "{oops")]);
        assert!(load_favorites(&storage).is_empty());
    }

    #[test]
    fn color_round_trips_and_unknown_falls_back_to_red() {
        let mut storage = MemoryStorage::new();
        save_color(&mut storage, FavoriteColor::Blue).unwrap();
        assert_eq!(load_color(&storage), FavoriteColor::Blue);

        let storage = MemoryStorage::with_slots([(COLOR_KEY, "mauve")]);
        assert_eq!(load_color(&storage), FavoriteColor::Red);
    }

    #[test]
    fn hydrate_drops_duplicate_ids() {
        let mut storage = MemoryStorage::new();
        let favorites = vec![Character::new(1, "Rick"), Character::new(1, "Rick again")];
        save_favorites(&mut storage, &favorites).unwrap();

        let state = hydrate(&storage);
        assert_eq!(state.characters().len(), 1);
        assert_eq!(state.characters()[0].name, "Rick");
    }
}

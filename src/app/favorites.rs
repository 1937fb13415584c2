//! In-memory favorites collection.
//!
//! Pure transitions only. Persisting the result is the caller's job: every
//! method that reports a change (`true` or a [`FavoriteChange`]) must be
//! followed by a write of [`FavoritesState::characters`] or
//! [`FavoritesState::color`].

use crate::domain::{Character, FavoriteColor};
use std::collections::HashSet;

/// Outcome of [`FavoritesState::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Ordered favorites plus an id index kept in lockstep with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    characters: Vec<Character>,
    ids: HashSet<u32>,
    color: FavoriteColor,
}

impl FavoritesState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the state from a stored collection, keeping the first entry for
    /// any repeated id.
    #[must_use]
    pub fn from_characters(characters: Vec<Character>, color: FavoriteColor) -> Self {
        let mut state = Self {
            characters: Vec::with_capacity(characters.len()),
            ids: HashSet::with_capacity(characters.len()),
            color,
        };
        for character in characters {
            state.add(character);
        }
        state
    }

    /// Favorites in insertion order.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub const fn ids(&self) -> &HashSet<u32> {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub const fn color(&self) -> FavoriteColor {
        self.color
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Adds `character` if absent, removes it if present.
    pub fn toggle(&mut self, character: Character) -> FavoriteChange {
        if self.remove(character.id) {
            FavoriteChange::Removed
        } else {
            self.add(character);
            FavoriteChange::Added
        }
    }

    /// Appends `character` unless its id is already a favorite.
    pub fn add(&mut self, character: Character) -> bool {
        if !self.ids.insert(character.id) {
            return false;
        }
        self.characters.push(character);
        true
    }

    /// Removes the favorite with `id`, if any.
    pub fn remove(&mut self, id: u32) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.characters.retain(|c| c.id != id);
        true
    }

    /// Removes every favorite. Returns `false` if there were none.
    pub fn clear(&mut self) -> bool {
        if self.characters.is_empty() {
            return false;
        }
        self.characters.clear();
        self.ids.clear();
        true
    }

    pub fn set_color(&mut self, color: FavoriteColor) -> bool {
        if self.color == color {
            return false;
        }
        self.color = color;
        true
    }
}

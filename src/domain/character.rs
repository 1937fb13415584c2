//! Character catalog domain model.
//!
//! These types mirror the JSON documents served by the character API. They are
//! plain values: favorites and catalog pages hold their own copies, never
//! references back into a network response.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Life status reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    /// Also used for any status value the API may add later.
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl CharacterStatus {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named reference to a location resource (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A single catalog entry.
///
/// `id` is the identity key: two characters with the same `id` are the same
/// character regardless of their other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: CharacterStatus,
    #[serde(default)]
    pub species: String,
    /// Sub-species or variant, frequently empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: LocationRef,
    #[serde(default)]
    pub location: LocationRef,
    #[serde(default)]
    pub image: String,
    /// Episode resource URLs, in airing order.
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// Creates a character with only identity and name set.
    ///
    /// Mostly useful for tests and fixtures; real values come from the API.
    ///
    /// # Examples
    ///
    /// ```
    /// use rickdex::domain::Character;
    ///
    /// let rick = Character::new(1, "Rick Sanchez");
    /// assert_eq!(rick.id, 1);
    /// assert!(rick.episode.is_empty());
    /// ```
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: CharacterStatus::Unknown,
            species: String::new(),
            kind: String::new(),
            gender: String::new(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            image: String::new(),
            episode: Vec::new(),
            url: String::new(),
            created: String::new(),
        }
    }
}

/// Pagination metadata attached to every catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of characters matching the query.
    pub count: u32,
    /// Total number of pages for the query.
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Accent color of the favorites panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl FavoriteColor {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Stored and displayed representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for FavoriteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`FavoriteColor`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown favorite color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for FavoriteColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

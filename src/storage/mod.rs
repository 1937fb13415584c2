//! Storage layer for persistent favorites data.
//!
//! This module provides a small key-value abstraction and the favorites
//! persistence built on it. The default backend is a JSON file written
//! atomically; an in-memory backend is available for tests.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: volatile in-memory implementation
//! - `favorites`: slot names and favorites (de)serialization

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use favorites::{COLOR_KEY, FAVORITES_KEY};
pub use json::JsonStorage;
pub use memory::MemoryStorage;

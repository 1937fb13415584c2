//! Infrastructure layer for filesystem and environment interactions.
//!
//! Platform data directory resolution and path expansion, used by configuration
//! loading and by the storage and logging setup.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, APP_DIR_NAME, STORAGE_FILE_NAME};

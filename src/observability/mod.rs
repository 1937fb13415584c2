//! Structured logging to a rotating file.
//!
//! All crate code logs through `tracing` macros with structured fields. This
//! module installs the subscriber that turns those events into text lines in
//! `<data_dir>/rickdex.log`:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → rickdex.log (+ 3 backups)
//! ```
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` in [`Config`](crate::Config) (also set by `RICKDEX_LOG`)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};

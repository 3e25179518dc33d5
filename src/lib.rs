//! env-from-compose - environment file templates from compose files
//!
//! This library scans compose documents for service environment entries
//! whose values are supplied by an external environment file (values
//! starting with the `$` interpolation sigil) and synchronizes those
//! variable names into a template file: missing names are appended as
//! empty `NAME=` placeholders, and names the file defines but no compose
//! file references are reported as removable. The file is append-only;
//! existing lines are never rewritten or deleted.
//!
//! # Project Structure
//!
//! - [`cli`]: argument surface and command orchestration
//! - [`compose`]: compose document model and variable extraction
//! - [`envfile`]: environment-file scanning, reconciliation and writing
//! - [`fs`]: filesystem abstraction for testability
//! - [`sync`]: the extract → reconcile → write pipeline

pub mod cli;
pub mod compose;
pub mod envfile;
pub mod fs;
pub mod sync;

// Re-export key types for convenient access
pub use compose::extractor::{extract_declared, ExtractError};
pub use envfile::{reconcile, EnvFileError, Reconciliation};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use sync::{run_sync, SyncConfig, SyncError, SyncReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

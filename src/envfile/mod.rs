//! Environment file reconciliation and append-only writing

pub mod scan;
pub mod writer;

pub use scan::{defined_names, reconcile, Reconciliation};
pub use writer::{append_section, render_append_section};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("Could not read environment file '{path}': {source}")]
    ReadFailed { path: PathBuf, source: io::Error },
    #[error("Could not write new environment variables to '{path}': {source}")]
    AppendFailed { path: PathBuf, source: io::Error },
}

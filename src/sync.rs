//! The synchronization pipeline: extract, reconcile, write
//!
//! Phases run strictly in order and the output file is touched only after
//! every input has been extracted successfully, so a failing input can
//! never leave a partially updated file behind.

use crate::compose::extractor::{extract_declared, ExtractError};
use crate::envfile::{append_section, reconcile, render_append_section, EnvFileError};
use crate::fs::FileSystem;
use chrono::{DateTime, Local};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Run configuration, built once from the command line
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Compose document paths, processed in the order given
    pub inputs: Vec<PathBuf>,
    /// Environment file to create or update
    pub output: PathBuf,
}

/// What a run changed and what it found stale
#[derive(Debug, PartialEq, Eq)]
pub struct SyncReport {
    /// Names appended to the file, ascending
    pub appended: Vec<String>,
    /// Names defined in the file but declared by no input, ascending
    pub removable: Vec<String>,
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    EnvFile(#[from] EnvFileError),
}

/// Execute one synchronization run against `fs`.
///
/// `now` is injected so tests can pin the timestamp in the appended header.
pub fn run_sync<F: FileSystem>(
    fs: &F,
    config: &SyncConfig,
    now: DateTime<Local>,
) -> Result<SyncReport, SyncError> {
    let declared = extract_declared(fs, &config.inputs)?;

    let existing = match fs.read_to_string(&config.output) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(EnvFileError::ReadFailed {
                path: config.output.clone(),
                source,
            }
            .into())
        }
    };

    let reconciliation = reconcile(declared, &existing);
    debug!(
        "Reconciled against '{}': {} to append, {} removable",
        config.output.display(),
        reconciliation.to_append.len(),
        reconciliation.removable.len()
    );

    let section = render_append_section(&reconciliation.to_append, now);
    append_section(fs, &config.output, &section)?;

    Ok(SyncReport {
        appended: reconciliation.to_append,
        removable: reconciliation.removable,
    })
}

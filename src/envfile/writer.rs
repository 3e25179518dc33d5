//! Rendering and appending of the synchronized section

use crate::envfile::EnvFileError;
use crate::fs::FileSystem;
use crate::NAME;
use chrono::{DateTime, Local};
use std::path::Path;

/// Render the section to append: a blank line, a timestamped comment, then
/// one `NAME=` placeholder per remaining declared variable. The header is
/// rendered even when `names` is empty.
pub fn render_append_section(names: &[String], now: DateTime<Local>) -> String {
    let mut section = format!(
        "\n# Appended by {} at {}\n",
        NAME,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    for name in names {
        section.push_str(name);
        section.push_str("=\n");
    }
    section
}

/// Append the rendered section, creating the file if it does not exist
pub fn append_section<F: FileSystem>(
    fs: &F,
    path: &Path,
    section: &str,
) -> Result<(), EnvFileError> {
    fs.append_to_file(path, section)
        .map_err(|source| EnvFileError::AppendFailed {
            path: path.to_path_buf(),
            source,
        })
}

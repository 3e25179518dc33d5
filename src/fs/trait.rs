//! FileSystem trait definition

use std::io;
use std::path::Path;

/// Abstraction over the two file operations the tool performs.
///
/// Failures carry the underlying `io::Error` so callers can distinguish a
/// missing file (the create-if-absent case) from a genuine read failure.
pub trait FileSystem {
    /// Read file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Append `content` to a file, creating the file if it does not exist
    fn append_to_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

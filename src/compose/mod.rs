//! Compose document model and environment variable extraction

pub mod document;
pub mod extractor;

pub use document::{ComposeDocument, ServiceDefinition};
pub use extractor::{extract_declared, ExtractError};

//! Extraction of environment-file variable names from compose documents
//!
//! A service environment entry names a variable the environment file must
//! supply when its value starts with the `$` interpolation sigil (`$VAR`,
//! `${VAR}`). Everything else is a hard-coded literal and is skipped with a
//! diagnostic. The prefix test is deliberately literal: `$$ESCAPED` also
//! counts as an indirection.

use crate::compose::document::ComposeDocument;
use crate::fs::FileSystem;
use serde_yaml::Value;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not open compose file '{path}': {source}")]
    InputUnreadable { path: PathBuf, source: io::Error },
    #[error("File '{path}' does not contain valid YAML: {source}")]
    InvalidYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Collect the declared variable names across all input documents, in the
/// order the paths were given. Any unreadable or unparsable input aborts
/// the whole extraction.
pub fn extract_declared<F: FileSystem>(
    fs: &F,
    inputs: &[PathBuf],
) -> Result<BTreeSet<String>, ExtractError> {
    let mut declared = BTreeSet::new();

    for path in inputs {
        let content = fs
            .read_to_string(path)
            .map_err(|source| ExtractError::InputUnreadable {
                path: path.clone(),
                source,
            })?;

        let document: Option<ComposeDocument> =
            serde_yaml::from_str(&content).map_err(|source| ExtractError::InvalidYaml {
                path: path.clone(),
                source,
            })?;

        collect_from_document(path, document, &mut declared);
    }

    debug!(
        "Extracted {} declared variable(s) from {} compose file(s)",
        declared.len(),
        inputs.len()
    );

    Ok(declared)
}

fn collect_from_document(
    path: &Path,
    document: Option<ComposeDocument>,
    declared: &mut BTreeSet<String>,
) {
    let services = match document.and_then(|d| d.services) {
        Some(services) => services,
        None => {
            warn!("No container services defined in '{}'", path.display());
            return;
        }
    };

    for (service_name, service) in &services {
        let environment = match &service.environment {
            Some(environment) => environment,
            None => continue,
        };

        for (name, value) in environment {
            match value {
                Value::String(s) if s.starts_with('$') => {
                    declared.insert(name.clone());
                }
                _ => {
                    warn!(
                        "Variable '{}' of service '{}' does not reference an \
                         environment file value, skipping",
                        name, service_name
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_extracts_dollar_prefixed_values() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "docker-compose.yml",
            r#"
services:
  web:
    environment:
      DB_HOST: "$DB_HOST"
      DB_PORT: "${DB_PORT}"
"#,
        );

        let declared = extract_declared(&fs, &paths(&["docker-compose.yml"])).unwrap();
        assert_eq!(
            declared.into_iter().collect::<Vec<_>>(),
            vec!["DB_HOST", "DB_PORT"]
        );
    }

    #[test]
    fn test_skips_literal_values() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "docker-compose.yml",
            r#"
services:
  web:
    environment:
      DB_HOST: "$DB_HOST"
      DEBUG: "true"
"#,
        );

        let declared = extract_declared(&fs, &paths(&["docker-compose.yml"])).unwrap();
        assert!(declared.contains("DB_HOST"));
        assert!(!declared.contains("DEBUG"));
    }

    #[test]
    fn test_skips_non_string_scalars() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "docker-compose.yml",
            r#"
services:
  web:
    environment:
      DEBUG: true
      PORT: 3000
      EMPTY: null
      API_KEY: "$API_KEY"
"#,
        );

        let declared = extract_declared(&fs, &paths(&["docker-compose.yml"])).unwrap();
        assert_eq!(declared.into_iter().collect::<Vec<_>>(), vec!["API_KEY"]);
    }

    #[test]
    fn test_double_dollar_counts_as_indirection() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "docker-compose.yml",
            r#"
services:
  web:
    environment:
      ESCAPED: "$$ESCAPED"
"#,
        );

        let declared = extract_declared(&fs, &paths(&["docker-compose.yml"])).unwrap();
        assert!(declared.contains("ESCAPED"));
    }

    #[test]
    fn test_document_without_services_is_skipped() {
        let fs = MockFileSystem::new();
        fs.add_file("no-services.yml", "version: '3'\n");
        fs.add_file(
            "docker-compose.yml",
            r#"
services:
  web:
    environment:
      DB_HOST: "$DB_HOST"
"#,
        );

        let declared =
            extract_declared(&fs, &paths(&["no-services.yml", "docker-compose.yml"])).unwrap();
        assert!(declared.contains("DB_HOST"));
    }

    #[test]
    fn test_empty_document_is_skipped() {
        let fs = MockFileSystem::new();
        fs.add_file("empty.yml", "");

        let declared = extract_declared(&fs, &paths(&["empty.yml"])).unwrap();
        assert!(declared.is_empty());
    }

    #[test]
    fn test_service_without_environment_is_skipped() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "docker-compose.yml",
            r#"
services:
  db:
    image: postgres:16
  web:
    environment:
      DB_HOST: "$DB_HOST"
"#,
        );

        let declared = extract_declared(&fs, &paths(&["docker-compose.yml"])).unwrap();
        assert_eq!(declared.len(), 1);
    }

    #[test]
    fn test_deduplicates_across_documents() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "first.yml",
            r#"
services:
  web:
    environment:
      DB_HOST: "$DB_HOST"
"#,
        );
        fs.add_file(
            "second.yml",
            r#"
services:
  worker:
    environment:
      DB_HOST: "$DB_HOST"
      QUEUE_URL: "$QUEUE_URL"
"#,
        );

        let declared = extract_declared(&fs, &paths(&["first.yml", "second.yml"])).unwrap();
        assert_eq!(
            declared.into_iter().collect::<Vec<_>>(),
            vec!["DB_HOST", "QUEUE_URL"]
        );
    }

    #[test]
    fn test_missing_input_aborts() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "present.yml",
            r#"
services:
  web:
    environment:
      DB_HOST: "$DB_HOST"
"#,
        );

        let err = extract_declared(&fs, &paths(&["present.yml", "missing.yml"])).unwrap_err();
        match err {
            ExtractError::InputUnreadable { path, .. } => {
                assert_eq!(path, PathBuf::from("missing.yml"));
            }
            other => panic!("Expected InputUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_aborts() {
        let fs = MockFileSystem::new();
        fs.add_file("broken.yml", "services:\n  web:\n    environment: [: :\n");

        let err = extract_declared(&fs, &paths(&["broken.yml"])).unwrap_err();
        match err {
            ExtractError::InvalidYaml { path, .. } => {
                assert_eq!(path, PathBuf::from("broken.yml"));
            }
            other => panic!("Expected InvalidYaml, got {:?}", other),
        }
    }
}

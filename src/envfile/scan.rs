//! Classification of existing environment-file lines
//!
//! A line defines a variable when, after trimming surrounding whitespace,
//! it matches `^[A-Z_]+=`. Everything else (comments, lowercase
//! assignments, free text) is ignored here and preserved verbatim in the
//! file, which is only ever appended to.

use regex::Regex;
use std::collections::BTreeSet;

/// Outcome of diffing the declared set against an existing file
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Declared names not yet defined in the file, ascending
    pub to_append: Vec<String>,
    /// Names defined in the file but declared by no input, ascending
    pub removable: Vec<String>,
}

/// Variable names defined by the file content, in line order
pub fn defined_names(content: &str) -> Vec<String> {
    let entry_re = Regex::new(r"^([A-Z_]+)=").expect("valid regex");

    content
        .lines()
        .filter_map(|line| {
            entry_re
                .captures(line.trim())
                .and_then(|cap| cap.get(1))
                .map(|name| name.as_str().to_string())
        })
        .collect()
}

/// Remove already-defined names from the declared set and collect names the
/// file defines that no input declared.
pub fn reconcile(declared: BTreeSet<String>, existing_content: &str) -> Reconciliation {
    let mut declared = declared;
    let mut removable = BTreeSet::new();

    for name in defined_names(existing_content) {
        if !declared.remove(&name) {
            removable.insert(name);
        }
    }

    Reconciliation {
        to_append: declared.into_iter().collect(),
        removable: removable.into_iter().collect(),
    }
}

//! Serde model of a compose document
//!
//! Only the keys this tool cares about are modeled; everything else in a
//! compose file (images, ports, volumes, ...) is ignored by deserialization.
//! Environment values are kept as raw YAML values so that non-string
//! scalars can be classified as literals instead of failing the parse.

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// A compose document: a mapping with an optional `services` mapping
#[derive(Debug, Deserialize)]
pub struct ComposeDocument {
    #[serde(default)]
    pub services: Option<BTreeMap<String, ServiceDefinition>>,
}

/// A single service definition with its optional `environment` mapping
#[derive(Debug, Deserialize)]
pub struct ServiceDefinition {
    #[serde(default)]
    pub environment: Option<BTreeMap<String, Value>>,
}

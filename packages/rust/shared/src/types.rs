//! Core domain types for docvars variable resolution.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current schema version for the emitted variables document.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Registry key under which the resolved manifest version is published.
pub const MAVEN_VERSION_KEY: &str = "maven_version";

/// Sentinel published when the manifest declares no version element.
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

// ---------------------------------------------------------------------------
// VariableRegistry
// ---------------------------------------------------------------------------

/// The caller-owned map of template variables handed to the documentation
/// templating system.
///
/// Backed by a `BTreeMap` so iteration (and every emitted format) is
/// deterministic across builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableRegistry(BTreeMap<String, String>);

impl VariableRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables in the registry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the registry holds no variables.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for VariableRegistry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, String)> for VariableRegistry {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

// ---------------------------------------------------------------------------
// VariablesDoc
// ---------------------------------------------------------------------------

/// The JSON document written when variables are emitted to disk for a
/// templating system that consumes a file instead of the in-process registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariablesDoc {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Tool version that produced this document.
    pub tool_version: String,
    /// When the document was generated.
    pub generated_at: DateTime<Utc>,
    /// The resolved variables.
    pub variables: VariableRegistry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_set_and_get() {
        let mut registry = VariableRegistry::new();
        registry.set(MAVEN_VERSION_KEY, "1.2.3");
        assert_eq!(registry.get(MAVEN_VERSION_KEY), Some("1.2.3"));
        assert_eq!(registry.get("missing"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_overwrite_replaces_value() {
        let mut registry = VariableRegistry::new();
        registry.set("site_name", "draft");
        registry.set("site_name", "final");
        assert_eq!(registry.get("site_name"), Some("final"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_iterates_in_key_order() {
        let mut registry = VariableRegistry::new();
        registry.set("zulu", "z");
        registry.set("alpha", "a");
        registry.set("mike", "m");

        let keys: Vec<&str> = registry.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "mike", "zulu"]);
    }

    #[test]
    fn registry_serializes_transparently() {
        let mut registry = VariableRegistry::new();
        registry.set("maven_version", "2.0.0");

        let json = serde_json::to_string(&registry).expect("serialize");
        assert_eq!(json, r#"{"maven_version":"2.0.0"}"#);
    }

    #[test]
    fn variables_doc_roundtrip() {
        let mut variables = VariableRegistry::new();
        variables.set(MAVEN_VERSION_KEY, "1.0.0-SNAPSHOT");

        let doc = VariablesDoc {
            schema_version: CURRENT_SCHEMA_VERSION,
            tool_version: "0.1.0".into(),
            generated_at: Utc::now(),
            variables,
        };

        let json = serde_json::to_string_pretty(&doc).expect("serialize");
        let parsed: VariablesDoc = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(
            parsed.variables.get(MAVEN_VERSION_KEY),
            Some("1.0.0-SNAPSHOT")
        );
    }
}

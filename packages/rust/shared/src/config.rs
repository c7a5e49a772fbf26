//! Project configuration for docvars.
//!
//! Config lives at `docvars.toml` in the directory the documentation build
//! runs from. CLI flags override config file values, which override defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocvarsError, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "docvars.toml";

/// Default manifest location relative to the docs directory the build runs
/// from: the POM one level up, at the project root.
pub const DEFAULT_MANIFEST_PATH: &str = "../pom.xml";

// ---------------------------------------------------------------------------
// Config structs (matching docvars.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// `[manifest]` section.
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// `[variables]` table — static variables seeded into the registry
    /// before resolution.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

/// `[manifest]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Path to the XML project manifest, relative to the working directory.
    #[serde(default = "default_manifest_path")]
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
        }
    }
}

fn default_manifest_path() -> String {
    DEFAULT_MANIFEST_PATH.into()
}

impl AppConfig {
    /// Resolved manifest path as a `PathBuf`.
    pub fn manifest_path(&self) -> PathBuf {
        PathBuf::from(&self.manifest.path)
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the application config from the working directory.
/// Returns defaults if `docvars.toml` does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocvarsError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        DocvarsError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Write a default config file into the working directory.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocvarsError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocvarsError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

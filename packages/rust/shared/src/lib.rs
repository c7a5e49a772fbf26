//! Shared types, error model, and configuration for docvars.
//!
//! This crate is the foundation depended on by all other docvars crates.
//! It provides:
//! - [`DocvarsError`] — the unified error type
//! - Domain types ([`VariableRegistry`], [`VariablesDoc`], well-known keys)
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CONFIG_FILE_NAME, DEFAULT_MANIFEST_PATH, ManifestConfig, init_config, load_config,
    load_config_from,
};
pub use error::{DocvarsError, Result};
pub use types::{
    CURRENT_SCHEMA_VERSION, MAVEN_VERSION_KEY, UNKNOWN_VERSION, VariableRegistry, VariablesDoc,
};

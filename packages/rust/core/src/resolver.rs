//! The version resolver.
//!
//! Reads the manifest once per documentation build, extracts the root-level
//! version, and publishes it into the caller's variable registry under
//! `maven_version`. A manifest without a version publishes the `UNKNOWN`
//! sentinel; a missing or malformed manifest is an error for the caller.

use std::path::Path;

use tracing::{info, instrument, warn};

use docvars_shared::{
    DocvarsError, MAVEN_VERSION_KEY, Result, UNKNOWN_VERSION, VariableRegistry,
};

/// Output from a resolver run.
#[derive(Debug, Clone)]
pub struct ResolveResult {
    /// The version string published to the registry.
    pub version: String,
    /// Whether the manifest declared a version. `false` means the `UNKNOWN`
    /// sentinel was published.
    pub declared: bool,
}

/// Resolve the manifest version and publish it into the registry.
///
/// Variables already present in the registry are left untouched, except for
/// `maven_version` itself, which is always overwritten.
#[instrument(skip(registry), fields(path = %manifest_path.display()))]
pub fn resolve_version(
    manifest_path: &Path,
    registry: &mut VariableRegistry,
) -> Result<ResolveResult> {
    let content = std::fs::read_to_string(manifest_path)
        .map_err(|e| DocvarsError::io(manifest_path, e))?;

    let pom = docvars_manifest::parse(&content)?;

    let (version, declared) = match pom.version {
        Some(v) => (v, true),
        None => {
            warn!("manifest declares no root-level version, publishing sentinel");
            (UNKNOWN_VERSION.to_string(), false)
        }
    };

    info!(
        artifact_id = pom.artifact_id.as_deref().unwrap_or("<none>"),
        version = %version,
        "resolved manifest version"
    );

    registry.set(MAVEN_VERSION_KEY, &version);

    Ok(ResolveResult { version, declared })
}

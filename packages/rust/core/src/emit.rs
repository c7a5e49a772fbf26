//! Emitters for the resolved variable registry.
//!
//! The in-process registry is the primary interface. These render it for
//! templating systems that read a file or a shell environment instead:
//! a JSON variables document, `KEY=value` env lines, or an aligned table
//! for terminals.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;

use docvars_shared::{
    CURRENT_SCHEMA_VERSION, DocvarsError, Result, VariableRegistry, VariablesDoc,
};

/// Output format for emitted variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    /// Human-readable aligned table.
    Text,
    /// JSON variables document with schema/tool/timestamp metadata.
    Json,
    /// `KEY=value` lines for shell consumption.
    Env,
}

/// Matches keys that are valid environment variable identifiers.
static ENV_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("env key regex"));

/// Render the registry in the requested format.
pub fn render(
    registry: &VariableRegistry,
    format: EmitFormat,
    tool_version: &str,
) -> Result<String> {
    match format {
        EmitFormat::Text => Ok(render_text(registry)),
        EmitFormat::Json => render_json(registry, tool_version),
        EmitFormat::Env => render_env(registry),
    }
}

fn render_text(registry: &VariableRegistry) -> String {
    let width = registry.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (key, value) in registry.iter() {
        out.push_str(&format!("{key:<width$} = {value}\n"));
    }
    out
}

fn render_json(registry: &VariableRegistry, tool_version: &str) -> Result<String> {
    let doc = VariablesDoc {
        schema_version: CURRENT_SCHEMA_VERSION,
        tool_version: tool_version.to_string(),
        generated_at: Utc::now(),
        variables: registry.clone(),
    };

    serde_json::to_string_pretty(&doc)
        .map_err(|e| DocvarsError::validation(format!("cannot serialize variables: {e}")))
}

fn render_env(registry: &VariableRegistry) -> Result<String> {
    let mut out = String::new();
    for (key, value) in registry.iter() {
        if !ENV_KEY_RE.is_match(key) {
            return Err(DocvarsError::validation(format!(
                "variable key '{key}' is not a valid environment identifier"
            )));
        }
        if value.contains('\n') {
            return Err(DocvarsError::validation(format!(
                "variable '{key}' contains a newline and cannot be emitted as env"
            )));
        }
        out.push_str(&format!("{key}={value}\n"));
    }
    Ok(out)
}

use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::error;

/// Read and parse a PSU descriptor, with the path in every error.
pub fn load_descriptor_file(path: impl AsRef<Path>) -> anyhow::Result<Value> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading descriptor: {}", path.display()))?;
    let val: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing json: {}", path.display()))?;
    Ok(val)
}

/// Load a JSON document, or `None` if it cannot be read, does not parse, or is `null`.
///
/// Failures are logged at ERROR.
pub fn load_json_from_file(path: impl AsRef<Path>) -> Option<Value> {
    let path = path.as_ref();
    match load_descriptor_file(path) {
        Ok(Value::Null) => None,
        Ok(val) => Some(val),
        Err(e) => {
            error!(path = %path.display(), "failed to load JSON: {e:#}");
            None
        }
    }
}

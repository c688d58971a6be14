//! Package manifest (`package.json`) name patching

use crate::error::GeneratorError;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

const MANIFEST_FILE: &str = "package.json";

/// Overwrite the manifest's `name` field with the project name.
///
/// A template without a manifest is tolerated as a no-op; a manifest that
/// exists but is not valid JSON is [`GeneratorError::ManifestParse`]. The
/// file is written back pretty-printed with a trailing newline.
pub async fn patch_name(project_dir: &Path, project_name: &str) -> Result<(), GeneratorError> {
    let path = project_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(());
    }

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| GeneratorError::fs(&path, e))?;

    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| GeneratorError::ManifestParse {
            path: path.clone(),
            source: e,
        })?;

    // Only objects carry a name field; anything else is left untouched
    if let Some(object) = manifest.as_object_mut() {
        object.insert("name".to_string(), Value::String(project_name.to_string()));
    }

    let mut serialized = serde_json::to_string_pretty(&manifest).map_err(|e| {
        GeneratorError::ManifestParse {
            path: path.clone(),
            source: e,
        }
    })?;
    serialized.push('\n');

    fs::write(&path, serialized)
        .await
        .map_err(|e| GeneratorError::fs(&path, e))
}

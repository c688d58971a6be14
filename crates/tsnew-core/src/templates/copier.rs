//! Recursive template tree copying

use crate::catalog::Framework;
use crate::error::GeneratorError;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy a framework template tree to the project directory.
///
/// Fails with [`GeneratorError::TemplateNotFound`] when the template
/// directory does not exist. The destination is created if missing and
/// overlaid if it already exists; individual copy failures surface as
/// [`GeneratorError::FileSystem`].
pub async fn copy_framework_template(
    framework: Framework,
    source: &Path,
    dest: &Path,
) -> Result<Vec<String>, GeneratorError> {
    if !source.is_dir() {
        return Err(GeneratorError::TemplateNotFound {
            framework: framework.id().to_string(),
            path: source.to_path_buf(),
        });
    }

    copy_tree(source, dest).await
}

/// Copy every file under `source` into `dest`, preserving relative paths.
/// Returns the relative paths of the copied files.
pub async fn copy_tree(source: &Path, dest: &Path) -> Result<Vec<String>, GeneratorError> {
    fs::create_dir_all(dest)
        .await
        .map_err(|e| GeneratorError::fs(dest, e))?;

    let mut copied = Vec::new();

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source.to_path_buf());
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk error"));
            GeneratorError::fs(path, io)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        // Strip the source prefix to get the path inside the project
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or(entry.path())
            .to_path_buf();
        let target = dest.join(&relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| GeneratorError::fs(parent, e))?;
        }

        fs::copy(entry.path(), &target)
            .await
            .map_err(|e| GeneratorError::fs(&target, e))?;

        copied.push(relative.to_string_lossy().into_owned());
    }

    Ok(copied)
}

/// Copy a single shared config file into the project root
pub async fn copy_config_file(source: &Path, dest: &Path) -> Result<(), GeneratorError> {
    fs::copy(source, dest)
        .await
        .map_err(|e| GeneratorError::fs(source, e))?;
    Ok(())
}

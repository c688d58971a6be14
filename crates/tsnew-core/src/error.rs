//! Error kinds surfaced by the generator
//!
//! Nothing below the top level handles or retries any of these; every error
//! propagates unmodified to the binary's single handler, which logs it and
//! exits unsuccessfully.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The user aborted an interactive prompt
    #[error("cancelled")]
    PromptCancelled,

    /// The selected framework has no template directory on disk
    #[error("no template found for framework '{framework}' (looked in {})", .path.display())]
    TemplateNotFound { framework: String, path: PathBuf },

    /// A copy, read, or write of project files failed
    #[error("filesystem operation failed on {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package manifest exists but is not valid JSON
    #[error("invalid package manifest at {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A package-manager invocation could not be spawned or exited non-zero
    #[error("command '{command}' failed: {reason}")]
    Subprocess { command: String, reason: String },
}

impl GeneratorError {
    /// Attach a path to an io error
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

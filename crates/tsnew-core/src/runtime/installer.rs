//! Package-manager invocation
//!
//! The generator talks to npm through the [`PackageInstaller`] trait so the
//! generation sequence can be exercised in tests without spawning anything.
//! No timeout and no retry; a non-zero exit or spawn failure is fatal.

use crate::error::GeneratorError;
use tokio::process::Command;

/// Seam between the generator and the package manager
#[allow(async_fn_in_trait)]
pub trait PackageInstaller {
    /// Bare install of whatever the template manifest declares
    async fn install_base(&self) -> Result<(), GeneratorError>;

    /// Install the given package specifiers, optionally as dev dependencies
    async fn install(&self, packages: &[String], dev: bool) -> Result<(), GeneratorError>;
}

/// Real installer shelling out to `npm` in the current working directory
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmInstaller;

impl NpmInstaller {
    async fn run(&self, args: &[&str]) -> Result<(), GeneratorError> {
        let command = format!("npm {}", args.join(" "));

        let status = Command::new("npm")
            .args(args)
            .status()
            .await
            .map_err(|e| GeneratorError::Subprocess {
                command: command.clone(),
                reason: format!("failed to spawn: {e}"),
            })?;

        if !status.success() {
            return Err(GeneratorError::Subprocess {
                command,
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

impl PackageInstaller for NpmInstaller {
    async fn install_base(&self) -> Result<(), GeneratorError> {
        self.run(&["install"]).await
    }

    async fn install(&self, packages: &[String], dev: bool) -> Result<(), GeneratorError> {
        let mut args = vec!["install"];
        if dev {
            args.push("-D");
        }
        args.extend(packages.iter().map(String::as_str));
        self.run(&args).await
    }
}

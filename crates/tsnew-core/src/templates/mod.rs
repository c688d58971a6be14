//! Template discovery, copying, and manifest patching
//!
//! This module provides:
//! - Location of the shipped template and config-template directories
//! - Recursive template tree copying
//! - Package manifest name patching

pub mod copier;
pub mod manifest;

use crate::catalog::Framework;
use std::path::PathBuf;

pub use copier::copy_tree;
pub use manifest::patch_name;

/// Environment variable overriding the framework templates directory
pub const TEMPLATES_DIR_ENV: &str = "TSNEW_TEMPLATES_DIR";

/// Environment variable overriding the shared config templates directory
pub const CONFIG_TEMPLATES_DIR_ENV: &str = "TSNEW_CONFIG_TEMPLATES_DIR";

/// Where the shipped template trees and shared config files live
#[derive(Debug, Clone)]
pub struct TemplateLayout {
    pub templates_dir: PathBuf,
    pub config_templates_dir: PathBuf,
}

impl TemplateLayout {
    pub fn new(templates_dir: PathBuf, config_templates_dir: PathBuf) -> Self {
        Self {
            templates_dir,
            config_templates_dir,
        }
    }

    /// Resolve the layout: env overrides first, then directories next to the
    /// executable, then the current directory.
    pub fn discover() -> Self {
        Self::new(
            resolve_dir(TEMPLATES_DIR_ENV, "templates"),
            resolve_dir(CONFIG_TEMPLATES_DIR_ENV, "config-templates"),
        )
    }

    /// Template source directory for a framework
    pub fn framework_template(&self, framework: Framework) -> PathBuf {
        self.templates_dir.join(framework.id())
    }

    /// Path of a shared config file
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_templates_dir.join(name)
    }
}

fn resolve_dir(env_var: &str, name: &str) -> PathBuf {
    if let Ok(path) = std::env::var(env_var) {
        return PathBuf::from(path);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(name);
            if candidate.is_dir() {
                return candidate;
            }
        }
    }

    PathBuf::from(name)
}

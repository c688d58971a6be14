//! Runtime detection and package installation
//!
//! This module provides:
//! - Node.js / npm availability detection
//! - The package-manager seam used by the generator

pub mod check;
pub mod installer;

pub use check::{check_node, check_npm, check_package_manager, RuntimeInfo};
pub use installer::{NpmInstaller, PackageInstaller};

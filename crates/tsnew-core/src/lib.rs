//! tsnew core - interactive TypeScript project generation
//!
//! This library turns a set of interactive answers (framework, state
//! manager, UI library, lint/format tooling, test tools, add-ons, project
//! name) into a populated, dependency-installed project directory.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Catalog & Selection** - the fixed option tables and the gated builder
//!   that collects answers one step at a time
//! - **Plan** - the declarative, inspectable list of config copies and
//!   install steps derived from a selection
//! - **Generator** - the sequential copy / patch / configure / install run
//! - **TUI** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod catalog;
pub mod error;
pub mod generator;
pub mod plan;
pub mod runtime;
pub mod selection;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{AddonTool, Catalog, Framework, TestTool, UiLibrary};
pub use error::GeneratorError;
pub use plan::{config_files, install_steps, InstallGroup, InstallStep};
pub use runtime::{NpmInstaller, PackageInstaller};
pub use selection::{Selection, SelectionBuilder};
pub use templates::TemplateLayout;

#[cfg(feature = "tui")]
pub use tui::run;

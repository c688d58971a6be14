//! Declarative install and config plan derived from a selection
//!
//! The gated install rules are evaluated in one fixed pass up front, so the
//! whole plan can be inspected and tested before any subprocess runs. A
//! step appears in the plan iff the corresponding artifact was selected.

use crate::catalog::{Catalog, TestTool, UiLibrary, FORMAT_PACKAGES, LINT_PACKAGES};
use crate::selection::Selection;

/// Dependency group a step belongs to; drives the colored step line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallGroup {
    StateManager,
    UiLibrary,
    Lint,
    Format,
    Test,
    Addon,
}

/// One pending package-manager invocation
#[derive(Debug, Clone)]
pub struct InstallStep {
    /// Step line printed before the subprocess runs
    pub label: String,
    pub group: InstallGroup,
    pub packages: Vec<String>,
    /// Install as dev dependencies (`npm install -D`)
    pub dev: bool,
}

impl InstallStep {
    fn new(label: impl Into<String>, group: InstallGroup, packages: &[&str], dev: bool) -> Self {
        Self {
            label: label.into(),
            group,
            packages: packages.iter().map(|p| p.to_string()).collect(),
            dev,
        }
    }
}

/// Shared config files to copy into the project root, in copy order.
///
/// Each entry is gated on the selection except the base `tsconfig.json`,
/// which is always last and always present.
pub fn config_files(selection: &Selection) -> Vec<&'static str> {
    let mut files = Vec::new();

    if selection.lint {
        files.push(".eslintrc.json");
    }
    if selection.format {
        files.push(".prettierrc");
    }
    if selection.test_tools.contains(&TestTool::Jest) {
        files.push("jest.config.js");
    }
    if selection.ui_library == UiLibrary::Tailwind {
        files.push("tailwind.config.js");
    }
    files.push("tsconfig.json");

    files
}

/// Build the ordered install plan for a selection.
///
/// Fixed order: state manager, UI library, lint bundle, formatter, test
/// tools, add-ons. The bare `npm install` that bootstraps the template's own
/// dependencies is not part of the plan; the generator always runs it first.
pub fn install_steps(catalog: &Catalog, selection: &Selection) -> Vec<InstallStep> {
    let mut steps = Vec::new();

    if let Some(state) = &selection.state_manager {
        steps.push(InstallStep::new(
            format!("Installing {state}"),
            InstallGroup::StateManager,
            &[state.as_str()],
            false,
        ));
    }

    if let Some(package) = catalog.ui_package(selection.ui_library) {
        steps.push(InstallStep::new(
            format!("Installing {}", selection.ui_library),
            InstallGroup::UiLibrary,
            &[package],
            false,
        ));
    }

    if selection.lint {
        steps.push(InstallStep::new(
            "Installing ESLint (Airbnb-compatible)",
            InstallGroup::Lint,
            LINT_PACKAGES,
            true,
        ));
    }

    if selection.format {
        steps.push(InstallStep::new(
            "Installing Prettier",
            InstallGroup::Format,
            FORMAT_PACKAGES,
            true,
        ));
    }

    // Test tools keep the catalog's fixed order, not selection order
    for tool in catalog.test_tools_for(selection.framework) {
        if selection.test_tools.contains(tool) {
            steps.push(InstallStep::new(
                format!("Installing {tool}"),
                InstallGroup::Test,
                tool.packages(),
                true,
            ));
        }
    }

    for addon in catalog.addon_tools() {
        if selection.addon_tools.contains(addon) {
            steps.push(InstallStep::new(
                format!("Installing {addon}"),
                InstallGroup::Addon,
                &[addon.package()],
                addon.dev(),
            ));
        }
    }

    steps
}

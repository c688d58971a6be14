//! The user's answers for one run, and the gated builder that collects them
//!
//! The builder hands out, at each step, only the choices valid given the
//! answers so far: picking a framework yields a [`FrameworkSelected`] stage
//! whose state-manager and test-tool sets are already narrowed to that
//! framework's catalog subset. The prompt layer never consults the catalog
//! directly.

use crate::catalog::{AddonTool, Catalog, Framework, TestTool, UiLibrary};

/// The complete set of answers gathered during one run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Selection {
    pub framework: Framework,
    /// Chosen state-manager package specifier, if any
    pub state_manager: Option<String>,
    pub ui_library: UiLibrary,
    pub lint: bool,
    pub format: bool,
    pub test_tools: Vec<TestTool>,
    pub addon_tools: Vec<AddonTool>,
    /// Directory name and package identifier; non-empty
    pub project_name: String,
}

/// First builder stage: only the framework choice is open
#[derive(Debug, Clone, Copy)]
pub struct SelectionBuilder<'c> {
    catalog: &'c Catalog,
}

impl<'c> SelectionBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Frameworks available for selection
    pub fn frameworks(&self) -> &'static [Framework] {
        self.catalog.frameworks()
    }

    /// Commit the framework choice, unlocking the framework-gated subsets
    pub fn framework(self, framework: Framework) -> FrameworkSelected<'c> {
        FrameworkSelected {
            catalog: self.catalog,
            framework,
        }
    }
}

/// Second builder stage: remaining choices, narrowed by the chosen framework
#[derive(Debug, Clone, Copy)]
pub struct FrameworkSelected<'c> {
    catalog: &'c Catalog,
    framework: Framework,
}

impl FrameworkSelected<'_> {
    pub fn framework(&self) -> Framework {
        self.framework
    }

    /// State-manager specifiers valid for the chosen framework
    pub fn state_managers(&self) -> &'static [&'static str] {
        self.catalog.state_managers_for(self.framework)
    }

    /// Test tools valid for the chosen framework
    pub fn test_tools(&self) -> &'static [TestTool] {
        self.catalog.test_tools_for(self.framework)
    }

    /// UI libraries (fixed set, not framework-gated)
    pub fn ui_libraries(&self) -> &'static [UiLibrary] {
        self.catalog.ui_libraries()
    }

    /// Add-on tools (fixed set, not framework-gated)
    pub fn addon_tools(&self) -> &'static [AddonTool] {
        self.catalog.addon_tools()
    }

    /// Assemble the final selection from the remaining answers
    #[allow(clippy::too_many_arguments)]
    pub fn finish(
        self,
        state_manager: Option<String>,
        ui_library: UiLibrary,
        lint: bool,
        format: bool,
        test_tools: Vec<TestTool>,
        addon_tools: Vec<AddonTool>,
        project_name: String,
    ) -> Selection {
        Selection {
            framework: self.framework,
            state_manager,
            ui_library,
            lint,
            format,
            test_tools,
            addon_tools,
            project_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_managers_gated_by_framework() {
        let catalog = Catalog::builtin();
        let builder = SelectionBuilder::new(&catalog);

        for framework in builder.frameworks() {
            let stage = builder.framework(*framework);
            assert_eq!(
                stage.state_managers(),
                catalog.state_managers_for(*framework),
                "offered state managers must equal the catalog subset for {}",
                framework
            );
        }
    }

    #[test]
    fn test_test_tools_gated_by_framework() {
        let catalog = Catalog::builtin();
        let builder = SelectionBuilder::new(&catalog);

        for framework in builder.frameworks() {
            let stage = builder.framework(*framework);
            assert_eq!(stage.test_tools(), catalog.test_tools_for(*framework));
        }
    }

    #[test]
    fn test_finish_carries_all_answers() {
        let catalog = Catalog::builtin();
        let selection = SelectionBuilder::new(&catalog)
            .framework(Framework::React18)
            .finish(
                Some("redux@^5.0.1".to_string()),
                UiLibrary::Mui,
                true,
                false,
                vec![TestTool::Jest],
                vec![AddonTool::Sonar],
                "my-app".to_string(),
            );

        assert_eq!(selection.framework, Framework::React18);
        assert_eq!(selection.state_manager.as_deref(), Some("redux@^5.0.1"));
        assert_eq!(selection.ui_library, UiLibrary::Mui);
        assert!(selection.lint);
        assert!(!selection.format);
        assert_eq!(selection.test_tools, vec![TestTool::Jest]);
        assert_eq!(selection.addon_tools, vec![AddonTool::Sonar]);
        assert_eq!(selection.project_name, "my-app");
    }
}

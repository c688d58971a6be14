//! The built-in option catalog: which state managers, UI libraries, and test
//! tools are valid for each framework, and which npm package each maps to.
//!
//! The catalog is immutable, process-wide data. It is always passed
//! explicitly into the prompt flow and the install planner so that option
//! resolution stays a pure function of (catalog, selection).

use std::fmt;

/// Supported project frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Vue3,
    Nuxt3,
    React18,
    NextJs15,
}

impl Framework {
    /// Template directory name for this framework
    pub fn id(&self) -> &'static str {
        match self {
            Framework::Vue3 => "vue3",
            Framework::Nuxt3 => "nuxt3",
            Framework::React18 => "react18",
            Framework::NextJs15 => "nextjs15",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Vue3 => "Vue 3",
            Framework::Nuxt3 => "Nuxt 3",
            Framework::React18 => "React 18",
            Framework::NextJs15 => "Next.js 15",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported UI libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLibrary {
    Tailwind,
    Mui,
    Shadcn,
    None,
}

impl UiLibrary {
    pub fn id(&self) -> &'static str {
        match self {
            UiLibrary::Tailwind => "tailwind",
            UiLibrary::Mui => "mui",
            UiLibrary::Shadcn => "shadcn",
            UiLibrary::None => "none",
        }
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Test tools offered per framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestTool {
    Jest,
    TestingLibraryReact,
    TestingLibraryVue,
}

impl TestTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            TestTool::Jest => "jest",
            TestTool::TestingLibraryReact => "@testing-library/react",
            TestTool::TestingLibraryVue => "@testing-library/vue",
        }
    }

    /// Dev-dependency bundle installed for this tool
    pub fn packages(&self) -> &'static [&'static str] {
        match self {
            TestTool::Jest => &["jest@^29.7.0", "ts-jest@^29.1.1"],
            TestTool::TestingLibraryReact => &["@testing-library/react@^14.1.2"],
            TestTool::TestingLibraryVue => &["@testing-library/vue@^8.1.0"],
        }
    }
}

impl fmt::Display for TestTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional add-on tools, independent of framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddonTool {
    Sanity,
    Sonar,
}

impl AddonTool {
    pub fn display_name(&self) -> &'static str {
        match self {
            AddonTool::Sanity => "sanity",
            AddonTool::Sonar => "sonar",
        }
    }

    /// Package specifier installed for this add-on
    pub fn package(&self) -> &'static str {
        match self {
            AddonTool::Sanity => "sanity@^3.26.1",
            AddonTool::Sonar => "sonarqube-scanner@^2.8.0",
        }
    }

    /// Whether the add-on installs as a dev dependency
    pub fn dev(&self) -> bool {
        match self {
            AddonTool::Sanity => false,
            AddonTool::Sonar => true,
        }
    }
}

impl fmt::Display for AddonTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// ESLint toolchain installed when linting is enabled (dev dependencies)
pub const LINT_PACKAGES: &[&str] = &[
    "eslint@^8.57.0",
    "eslint-config-airbnb@^19.0.4",
    "eslint-config-airbnb-typescript@^17.1.0",
    "eslint-plugin-import@^2.29.1",
    "eslint-plugin-react@^7.34.1",
    "eslint-plugin-react-hooks@^4.6.0",
    "eslint-plugin-jsx-a11y@^6.8.0",
    "typescript",
];

/// Formatter installed when formatting is enabled (dev dependency)
pub const FORMAT_PACKAGES: &[&str] = &["prettier@^3.2.5"];

/// The fixed option tables keyed by framework
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    frameworks: &'static [Framework],
    state_managers: &'static [(Framework, &'static [&'static str])],
    test_tools: &'static [(Framework, &'static [TestTool])],
    ui_libraries: &'static [UiLibrary],
    ui_packages: &'static [(UiLibrary, &'static str)],
    addon_tools: &'static [AddonTool],
}

const VUE_STATE: &[&str] = &["pinia@^2.1.6", "vuex@^4.1.0"];
const REACT_STATE: &[&str] = &["@reduxjs/toolkit@^2.1.1", "redux@^5.0.1", "mobx@^6.11.0"];

const VUE_TESTS: &[TestTool] = &[TestTool::Jest, TestTool::TestingLibraryVue];
const REACT_TESTS: &[TestTool] = &[TestTool::Jest, TestTool::TestingLibraryReact];

impl Catalog {
    /// The built-in catalog shipped with the tool
    pub const fn builtin() -> Self {
        Self {
            frameworks: &[
                Framework::Vue3,
                Framework::Nuxt3,
                Framework::React18,
                Framework::NextJs15,
            ],
            state_managers: &[
                (Framework::Vue3, VUE_STATE),
                (Framework::Nuxt3, VUE_STATE),
                (Framework::React18, REACT_STATE),
                (Framework::NextJs15, REACT_STATE),
            ],
            test_tools: &[
                (Framework::Vue3, VUE_TESTS),
                (Framework::Nuxt3, VUE_TESTS),
                (Framework::React18, REACT_TESTS),
                (Framework::NextJs15, REACT_TESTS),
            ],
            ui_libraries: &[
                UiLibrary::Tailwind,
                UiLibrary::Mui,
                UiLibrary::Shadcn,
                UiLibrary::None,
            ],
            ui_packages: &[
                (UiLibrary::Tailwind, "tailwindcss@^3.4.1"),
                (UiLibrary::Mui, "@mui/material@^5.15.0"),
                (UiLibrary::Shadcn, "class-variance-authority@^0.7.0"),
            ],
            addon_tools: &[AddonTool::Sanity, AddonTool::Sonar],
        }
    }

    pub fn frameworks(&self) -> &'static [Framework] {
        self.frameworks
    }

    /// State-manager package specifiers valid for a framework
    pub fn state_managers_for(&self, framework: Framework) -> &'static [&'static str] {
        self.state_managers
            .iter()
            .find(|(f, _)| *f == framework)
            .map(|(_, s)| *s)
            .unwrap_or(&[])
    }

    /// Test tools valid for a framework
    pub fn test_tools_for(&self, framework: Framework) -> &'static [TestTool] {
        self.test_tools
            .iter()
            .find(|(f, _)| *f == framework)
            .map(|(_, t)| *t)
            .unwrap_or(&[])
    }

    pub fn ui_libraries(&self) -> &'static [UiLibrary] {
        self.ui_libraries
    }

    /// Package specifier for a UI library, or None for `UiLibrary::None`
    pub fn ui_package(&self, ui: UiLibrary) -> Option<&'static str> {
        self.ui_packages
            .iter()
            .find(|(u, _)| *u == ui)
            .map(|(_, p)| *p)
    }

    pub fn addon_tools(&self) -> &'static [AddonTool] {
        self.addon_tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_framework_has_state_managers() {
        let catalog = Catalog::builtin();
        for framework in catalog.frameworks() {
            assert!(
                !catalog.state_managers_for(*framework).is_empty(),
                "{} has no state managers registered",
                framework
            );
        }
    }

    #[test]
    fn test_every_framework_has_test_tools() {
        let catalog = Catalog::builtin();
        for framework in catalog.frameworks() {
            let tools = catalog.test_tools_for(*framework);
            assert!(tools.contains(&TestTool::Jest));
            assert_eq!(tools.len(), 2);
        }
    }

    #[test]
    fn test_vue_frameworks_offer_vue_testing_library() {
        let catalog = Catalog::builtin();
        for framework in [Framework::Vue3, Framework::Nuxt3] {
            assert!(catalog
                .test_tools_for(framework)
                .contains(&TestTool::TestingLibraryVue));
        }
        for framework in [Framework::React18, Framework::NextJs15] {
            assert!(catalog
                .test_tools_for(framework)
                .contains(&TestTool::TestingLibraryReact));
        }
    }

    #[test]
    fn test_ui_package_mapping() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.ui_package(UiLibrary::Tailwind),
            Some("tailwindcss@^3.4.1")
        );
        assert_eq!(catalog.ui_package(UiLibrary::None), None);
    }

    #[test]
    fn test_lint_bundle_size() {
        assert_eq!(LINT_PACKAGES.len(), 8);
    }
}

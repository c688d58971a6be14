//! The generation sequence: copy, patch, configure, install
//!
//! Every step prints a colored line before the risky operation so the point
//! of failure is inferable from the console. Any failure aborts the
//! remaining steps; there is no rollback of a half-created directory.

use crate::catalog::Catalog;
use crate::error::GeneratorError;
use crate::plan::{self, InstallGroup};
use crate::runtime::PackageInstaller;
use crate::selection::Selection;
use crate::templates::{copier, manifest, TemplateLayout};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Materialize the project directory: template copy, manifest patch, and
/// the gated shared config files. No subprocess runs here.
pub async fn materialize(
    layout: &TemplateLayout,
    selection: &Selection,
    project_dir: &Path,
) -> Result<(), GeneratorError> {
    println!(
        "{}",
        format!("Copying template: {}", selection.framework.id()).green()
    );
    let source = layout.framework_template(selection.framework);
    copier::copy_framework_template(selection.framework, &source, project_dir).await?;

    manifest::patch_name(project_dir, &selection.project_name).await?;

    for name in plan::config_files(selection) {
        copier::copy_config_file(&layout.config_file(name), &project_dir.join(name)).await?;
    }

    Ok(())
}

/// Run the full generation sequence for a collected selection.
///
/// The working directory is switched to the new project before any install
/// runs; all package-manager invocations happen inside it.
pub async fn generate<I: PackageInstaller>(
    catalog: &Catalog,
    layout: &TemplateLayout,
    selection: &Selection,
    installer: &I,
) -> Result<PathBuf, GeneratorError> {
    let cwd = std::env::current_dir().map_err(|e| GeneratorError::fs(".", e))?;
    let project_dir = cwd.join(&selection.project_name);

    materialize(layout, selection, &project_dir).await?;

    std::env::set_current_dir(&project_dir).map_err(|e| GeneratorError::fs(&project_dir, e))?;

    println!("{}", "Installing base dependencies...".blue());
    installer.install_base().await?;

    for step in plan::install_steps(catalog, selection) {
        println!("{}", colorize_step(&step.label, step.group));
        installer.install(&step.packages, step.dev).await?;
    }

    println!();
    println!("{}", "Project created successfully!".bright_green());

    Ok(project_dir)
}

fn colorize_step(label: &str, group: InstallGroup) -> String {
    match group {
        InstallGroup::StateManager | InstallGroup::UiLibrary => label.blue().to_string(),
        InstallGroup::Lint | InstallGroup::Format => label.yellow().to_string(),
        InstallGroup::Test => label.magenta().to_string(),
        InstallGroup::Addon => label.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Framework, TestTool, UiLibrary};
    use std::sync::{Mutex, OnceLock};

    /// Recording installer; each invocation is (packages, dev), base = ([], false)
    #[derive(Default)]
    struct FakeInstaller {
        calls: Mutex<Vec<(Vec<String>, bool)>>,
    }

    impl PackageInstaller for FakeInstaller {
        async fn install_base(&self) -> Result<(), GeneratorError> {
            self.calls.lock().unwrap().push((Vec::new(), false));
            Ok(())
        }

        async fn install(&self, packages: &[String], dev: bool) -> Result<(), GeneratorError> {
            self.calls.lock().unwrap().push((packages.to_vec(), dev));
            Ok(())
        }
    }

    // generate() mutates the process working directory; serialize these tests
    fn cwd_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn fixture_layout(root: &Path) -> TemplateLayout {
        let templates = root.join("templates");
        let configs = root.join("config-templates");
        for framework in ["vue3", "nuxt3"] {
            let dir = templates.join(framework);
            std::fs::create_dir_all(dir.join("src")).unwrap();
            std::fs::write(
                dir.join("package.json"),
                r#"{"name":"starter","version":"0.0.0"}"#,
            )
            .unwrap();
            std::fs::write(dir.join("src/main.ts"), "export {}\n").unwrap();
        }
        std::fs::create_dir_all(&configs).unwrap();
        for name in [
            "tsconfig.json",
            ".eslintrc.json",
            ".prettierrc",
            "jest.config.js",
            "tailwind.config.js",
        ] {
            std::fs::write(configs.join(name), format!("// {name}\n")).unwrap();
        }
        TemplateLayout::new(templates, configs)
    }

    #[tokio::test]
    async fn test_minimal_run_copies_template_and_installs_nothing_extra() {
        let _guard = cwd_lock().lock().unwrap();
        let workdir = tempfile::tempdir().unwrap();
        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(workdir.path()).unwrap();

        let catalog = Catalog::builtin();
        let layout = fixture_layout(workdir.path());
        let selection = Selection {
            framework: Framework::Vue3,
            state_manager: None,
            ui_library: UiLibrary::None,
            lint: false,
            format: false,
            test_tools: Vec::new(),
            addon_tools: Vec::new(),
            project_name: "demo".to_string(),
        };
        let installer = FakeInstaller::default();

        let project_dir = generate(&catalog, &layout, &selection, &installer)
            .await
            .unwrap();
        std::env::set_current_dir(&original_cwd).unwrap();

        assert!(project_dir.ends_with("demo"));
        assert!(project_dir.join("src/main.ts").is_file());
        assert!(project_dir.join("tsconfig.json").is_file());
        assert!(!project_dir.join(".eslintrc.json").exists());
        assert!(!project_dir.join("jest.config.js").exists());

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(project_dir.join("package.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(manifest["name"], "demo");

        // Exactly the bare bootstrap install
        let calls = installer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.is_empty());
    }

    #[tokio::test]
    async fn test_full_run_installs_in_fixed_order() {
        let _guard = cwd_lock().lock().unwrap();
        let workdir = tempfile::tempdir().unwrap();
        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(workdir.path()).unwrap();

        let catalog = Catalog::builtin();
        let layout = fixture_layout(workdir.path());
        let selection = Selection {
            framework: Framework::Nuxt3,
            state_manager: Some("pinia@^2.1.6".to_string()),
            ui_library: UiLibrary::Tailwind,
            lint: true,
            format: false,
            test_tools: vec![TestTool::Jest],
            addon_tools: Vec::new(),
            project_name: "site".to_string(),
        };
        let installer = FakeInstaller::default();

        let project_dir = generate(&catalog, &layout, &selection, &installer)
            .await
            .unwrap();
        std::env::set_current_dir(&original_cwd).unwrap();

        assert!(project_dir.join(".eslintrc.json").is_file());
        assert!(project_dir.join("jest.config.js").is_file());
        assert!(project_dir.join("tailwind.config.js").is_file());
        assert!(project_dir.join("tsconfig.json").is_file());
        assert!(!project_dir.join(".prettierrc").exists());

        let calls = installer.calls.lock().unwrap();
        // Base install plus exactly four plan steps
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[1].0, vec!["pinia@^2.1.6"]);
        assert_eq!(calls[2].0, vec!["tailwindcss@^3.4.1"]);
        assert_eq!(calls[3].0.len(), 8);
        assert!(calls[3].1);
        assert_eq!(calls[4].0, vec!["jest@^29.7.0", "ts-jest@^29.1.1"]);
        assert!(calls[4].1);
    }

    #[tokio::test]
    async fn test_unknown_template_aborts_before_any_install() {
        let _guard = cwd_lock().lock().unwrap();
        let workdir = tempfile::tempdir().unwrap();
        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(workdir.path()).unwrap();

        let catalog = Catalog::builtin();
        let layout = fixture_layout(workdir.path());
        let selection = Selection {
            framework: Framework::React18, // no react18 fixture on disk
            state_manager: None,
            ui_library: UiLibrary::None,
            lint: false,
            format: false,
            test_tools: Vec::new(),
            addon_tools: Vec::new(),
            project_name: "app".to_string(),
        };
        let installer = FakeInstaller::default();

        let err = generate(&catalog, &layout, &selection, &installer)
            .await
            .unwrap_err();
        std::env::set_current_dir(&original_cwd).unwrap();

        assert!(matches!(err, GeneratorError::TemplateNotFound { .. }));
        assert!(installer.calls.lock().unwrap().is_empty());
    }
}

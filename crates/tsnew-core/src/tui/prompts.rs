//! Interactive prompt flow building a [`Selection`] one gated step at a time

use crate::catalog::{AddonTool, Catalog, Framework, TestTool, UiLibrary};
use crate::error::GeneratorError;
use crate::generator;
use crate::runtime::{check_package_manager, NpmInstaller};
use crate::selection::{Selection, SelectionBuilder};
use crate::templates::TemplateLayout;
use anyhow::Result;

/// Run the interactive flow: collect the selection, check npm, generate.
pub async fn run(catalog: &Catalog, layout: &TemplateLayout) -> Result<()> {
    cliclack::intro("TypeScript project generator")?;

    let selection = collect_selection(catalog)?;

    check_runtimes()?;

    generator::generate(catalog, layout, &selection, &NpmInstaller).await?;

    print_next_steps(&selection)?;

    Ok(())
}

/// Map a prompt result, turning a user abort into [`GeneratorError::PromptCancelled`]
fn interact<T>(result: std::io::Result<T>) -> Result<T> {
    result.map_err(|e| {
        if e.kind() == std::io::ErrorKind::Interrupted {
            anyhow::Error::new(GeneratorError::PromptCancelled)
        } else {
            anyhow::Error::new(e)
        }
    })
}

fn collect_selection(catalog: &Catalog) -> Result<Selection> {
    let builder = SelectionBuilder::new(catalog);

    let framework = select_framework(&builder)?;
    let stage = builder.framework(framework);

    let state_manager = select_state_manager(stage.state_managers())?;
    let ui_library = select_ui_library(stage.ui_libraries())?;

    let lint: bool = interact(
        cliclack::confirm("Install ESLint with the Airbnb config?")
            .initial_value(true)
            .interact(),
    )?;

    let format: bool = interact(
        cliclack::confirm("Install Prettier?")
            .initial_value(true)
            .interact(),
    )?;

    let test_tools = select_test_tools(stage.test_tools())?;
    let addon_tools = select_addon_tools(stage.addon_tools())?;

    let project_name: String = interact(
        cliclack::input("Project name (a directory will be created)")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Project name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact(),
    )?;

    Ok(stage.finish(
        state_manager,
        ui_library,
        lint,
        format,
        test_tools,
        addon_tools,
        project_name,
    ))
}

fn select_framework(builder: &SelectionBuilder<'_>) -> Result<Framework> {
    let mut select = cliclack::select("Select a framework");
    for framework in builder.frameworks() {
        select = select.item(*framework, framework.display_name(), "");
    }
    interact(select.interact())
}

fn select_state_manager(choices: &[&'static str]) -> Result<Option<String>> {
    // Index 0 is the explicit "none" item; catalog entries follow
    let mut select = cliclack::select("Select a state manager");
    select = select.item(0usize, "none", "skip state management");
    for (idx, spec) in choices.iter().enumerate() {
        select = select.item(idx + 1, *spec, "");
    }

    let choice: usize = interact(select.interact())?;
    Ok(if choice == 0 {
        None
    } else {
        Some(choices[choice - 1].to_string())
    })
}

fn select_ui_library(choices: &[UiLibrary]) -> Result<UiLibrary> {
    let mut select = cliclack::select("Select a UI library");
    for ui in choices {
        select = select.item(*ui, ui.id(), "");
    }
    interact(select.interact())
}

fn select_test_tools(choices: &[TestTool]) -> Result<Vec<TestTool>> {
    let mut multi = cliclack::multiselect("Add testing?");
    for tool in choices {
        multi = multi.item(*tool, tool.display_name(), "");
    }
    interact(multi.required(false).interact())
}

fn select_addon_tools(choices: &[AddonTool]) -> Result<Vec<AddonTool>> {
    let mut multi = cliclack::multiselect("Additional tools");
    for addon in choices {
        multi = multi.item(*addon, addon.display_name(), "");
    }
    interact(multi.required(false).interact())
}

fn check_runtimes() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking package manager...");

    match check_package_manager() {
        Ok(runtimes) => {
            let info: Vec<String> = runtimes
                .iter()
                .map(|r| {
                    if r.available {
                        format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
                    } else {
                        format!("{} (not installed)", r.name)
                    }
                })
                .collect();
            spinner.stop(format!("Detected: {}", info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing package manager");
            Err(e.into())
        }
    }
}

fn print_next_steps(selection: &Selection) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();
    println!("  1.  cd {}", selection.project_name);
    println!("  2.  npm run dev");

    cliclack::outro("Happy coding!")?;

    Ok(())
}

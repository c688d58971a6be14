//! tsnew - interactive TypeScript project generator

use clap::Parser;
use colored::Colorize;
use tsnew_core::{Catalog, TemplateLayout};

/// All configuration is gathered interactively; there are no flags beyond
/// the standard --help and --version.
#[derive(Parser, Debug)]
#[command(name = "tsnew")]
#[command(about = "Interactive CLI for scaffolding TypeScript projects")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();

    let catalog = Catalog::builtin();
    let layout = TemplateLayout::discover();

    let result = tsnew_core::run(&catalog, &layout).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    // Single top-level error handler: log and exit unsuccessfully
    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

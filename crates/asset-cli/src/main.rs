//! Asset Manager CLI
//!
//! Plays the package manager's role: resolves packages below the vendor
//! directory and installs or removes their assets in the public root.

mod cli;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(command = ?cli.command, "Starting");

    if let Commands::Completions { shell } = cli.command {
        commands::run_completions(shell);
        return Ok(());
    }

    let root = project_root(cli.project_root)?;
    let output = commands::Output { json: cli.json };

    match cli.command {
        Commands::Install { packages } => commands::run_install(&root, &packages, output),
        Commands::Uninstall { packages } => commands::run_uninstall(&root, &packages, output),
        Commands::Update { from, to } => commands::run_update(&root, &from, &to, output),
        Commands::Apply { plan } => commands::run_apply(&root, &plan, output),
        Commands::Inspect { package } => commands::run_inspect(&root, &package, output),
        Commands::Status => commands::run_status(&root, output),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Canonical project root: the given path, or the current directory.
fn project_root(given: Option<PathBuf>) -> Result<PathBuf> {
    let root = match given {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    Ok(asset_fs::io::canonicalize(&root)?)
}

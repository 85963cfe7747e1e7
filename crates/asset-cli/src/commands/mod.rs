//! Command implementations for asset-cli

pub mod apply;
pub mod completions;
pub mod inspect;
pub mod operate;
pub mod status;

pub use apply::run_apply;
pub use completions::run_completions;
pub use inspect::run_inspect;
pub use operate::{run_install, run_uninstall, run_update};
pub use status::run_status;

use std::path::Path;

use asset_core::{AssetManager, Settings, SyncReport, VendorLocator};
use colored::Colorize;

use crate::error::{CliError, Result};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

/// Build a manager for the project at `root`, using its settings file when
/// there is one.
pub fn open_manager(root: &Path) -> Result<AssetManager<VendorLocator>> {
    let settings = Settings::discover(root)?;
    let locator = VendorLocator::new(settings.vendor_dir(root));
    Ok(AssetManager::new(root, settings, locator))
}

/// Print a report and turn recorded failures into an error exit.
pub fn finish(report: &SyncReport, output: Output) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_report(report);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} package operation(s) failed",
            report.errors.len()
        )))
    }
}

fn print_report(report: &SyncReport) {
    for name in &report.removed {
        println!("   {} {}", "-".red(), name.cyan());
    }
    for name in &report.installed {
        println!("   {} {}", "+".green(), name.cyan());
    }
    for warning in &report.warnings {
        println!("{} {}", "WARN".yellow().bold(), warning);
    }
    for error in &report.errors {
        println!("{} {}", "FAILED".red().bold(), error);
    }

    if report.installed.is_empty() && report.removed.is_empty() {
        println!("{} Nothing to do.", "OK".green().bold());
    } else {
        println!(
            "{} {} installed, {} removed.",
            "OK".green().bold(),
            report.installed.len(),
            report.removed.len()
        );
    }
}

//! Immediate install, uninstall and update

use std::path::Path;

use asset_core::{Package, PackageOperation, SyncReport};
use colored::Colorize;

use super::{Output, finish, open_manager};
use crate::error::Result;

/// Run the install command
pub fn run_install(root: &Path, packages: &[String], output: Output) -> Result<()> {
    let operations = packages
        .iter()
        .map(|name| PackageOperation::Install(Package::new(name)));
    run_each(root, operations, output)
}

/// Run the uninstall command
pub fn run_uninstall(root: &Path, packages: &[String], output: Output) -> Result<()> {
    let operations = packages
        .iter()
        .map(|name| PackageOperation::Uninstall(Package::new(name)));
    run_each(root, operations, output)
}

/// Run the update command
pub fn run_update(root: &Path, from: &str, to: &str, output: Output) -> Result<()> {
    let operation = PackageOperation::Update {
        from: Package::new(from),
        to: Package::new(to),
    };
    run_each(root, std::iter::once(operation), output)
}

/// Dispatch each operation immediately. The first failure stops the run.
fn run_each(
    root: &Path,
    operations: impl IntoIterator<Item = PackageOperation>,
    output: Output,
) -> Result<()> {
    let manager = open_manager(root)?;
    let mut report = SyncReport::new();

    for operation in operations {
        if !output.json {
            println!("{} {}", "=>".blue().bold(), operation);
        }
        report.merge(manager.handle(&operation)?);
    }

    finish(&report, output)
}

//! Inspect command implementation

use std::path::Path;

use asset_core::{ConfigInspection, Package};
use colored::Colorize;
use serde_json::json;

use super::{Output, open_manager};
use crate::error::Result;

/// Run the inspect command
pub fn run_inspect(root: &Path, package: &str, output: Output) -> Result<()> {
    let manager = open_manager(root)?;
    let package = Package::new(package);
    let (config_path, inspection) = manager.inspect(&package)?;

    if output.json {
        let (status, detail) = match &inspection {
            ConfigInspection::Missing => ("missing", json!(null)),
            ConfigInspection::NoAssetConfig => ("no-asset-config", json!(null)),
            ConfigInspection::Unsafe(construct) => ("unsafe", json!(construct)),
            ConfigInspection::Declared(paths) => ("declared", json!(paths)),
        };
        let value = json!({
            "package": package.name,
            "config": config_path.display().to_string(),
            "status": status,
            "detail": detail,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}:  {}", "Package".dimmed(), package.name.cyan());
    println!("{}:   {}", "Config".dimmed(), config_path.display());
    match inspection {
        ConfigInspection::Missing => {
            println!("{}", "No configuration file".yellow());
        }
        ConfigInspection::NoAssetConfig => {
            println!("{}", "No asset configuration declared".dimmed());
        }
        ConfigInspection::Unsafe(construct) => {
            println!("{} {}", "UNSAFE".red().bold(), construct);
        }
        ConfigInspection::Declared(paths) => {
            println!("{} {} declared path(s):", "SAFE".green().bold(), paths.len());
            for path in paths {
                let marker = if root.join(&path).is_dir() {
                    "+".green()
                } else {
                    "?".yellow()
                };
                println!("   {} {}", marker, path);
            }
        }
    }
    Ok(())
}

//! Status command implementation

use std::path::Path;

use colored::Colorize;

use super::{Output, open_manager};
use crate::error::Result;

/// Run the status command
pub fn run_status(root: &Path, output: Output) -> Result<()> {
    let manager = open_manager(root)?;
    let entries = manager.status()?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Asset Status".bold());
    println!();
    println!("{}:  {}", "Public".dimmed(), manager.public_dir().display());
    println!();

    if entries.is_empty() {
        println!("  {} (use {} to add)", "None".dimmed(), "asset-manager install".cyan());
        return Ok(());
    }
    for entry in &entries {
        let state = if entry.present {
            "installed".green()
        } else {
            "missing".yellow()
        };
        println!("  {} {} ({})", "+".green(), entry.name.cyan(), state);
    }
    Ok(())
}

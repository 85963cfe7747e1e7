//! Deferred execution of an operation plan

use std::path::Path;

use asset_core::{Package, PackageOperation};
use asset_fs::{ConfigStore, NormalizedPath};
use colored::Colorize;
use serde::Deserialize;

use super::{Output, finish, open_manager};
use crate::error::{CliError, Result};

/// Operations to schedule, in plan order.
#[derive(Debug, Default, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub operations: Vec<PlannedOperation>,
}

/// One plan entry, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlannedOperation {
    Install { package: String },
    Uninstall { package: String },
    Update { from: String, to: String },
}

impl From<PlannedOperation> for PackageOperation {
    fn from(planned: PlannedOperation) -> Self {
        match planned {
            PlannedOperation::Install { package } => Self::Install(Package::new(package)),
            PlannedOperation::Uninstall { package } => Self::Uninstall(Package::new(package)),
            PlannedOperation::Update { from, to } => Self::Update {
                from: Package::new(from),
                to: Package::new(to),
            },
        }
    }
}

/// Load a plan file, format chosen by extension.
pub fn load_plan(path: &Path) -> Result<Plan> {
    let path = NormalizedPath::new(path);
    if !path.is_file() {
        return Err(CliError::user(format!("Plan not found: {path}")));
    }
    Ok(ConfigStore::new().load(&path)?)
}

/// Run the apply command
///
/// Every operation is scheduled first, then the queue is flushed once:
/// uninstalls run before installs and a failing package does not stop the
/// others.
pub fn run_apply(root: &Path, plan_path: &Path, output: Output) -> Result<()> {
    let plan = load_plan(plan_path)?;
    let mut manager = open_manager(root)?;

    for planned in plan.operations {
        manager.schedule(planned.into());
    }
    if !output.json {
        println!(
            "{} Applying {} package operation(s)...",
            "=>".blue().bold(),
            manager.pending()
        );
    }

    let report = manager.flush();
    finish(&report, output)
}

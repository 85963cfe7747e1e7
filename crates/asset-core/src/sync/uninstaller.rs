use std::path::PathBuf;

use asset_fs::{NormalizedPath, io};
use tracing::{debug, info};

use super::discovery::discover_namespaces;
use super::report::SyncReport;
use crate::Result;
use crate::ledger::Ledger;

/// Deletes installed asset namespaces the ledger says this tool owns.
#[derive(Debug, Clone)]
pub struct AssetUninstaller {
    public_dir: PathBuf,
    ledger_path: NormalizedPath,
}

impl AssetUninstaller {
    pub fn new(public_dir: impl Into<PathBuf>, ignore_file: &str) -> Self {
        let public_dir = public_dir.into();
        let ledger_path = NormalizedPath::new(public_dir.join(ignore_file));
        Self {
            public_dir,
            ledger_path,
        }
    }

    /// Remove every namespace found under `sources` that the ledger lists
    /// and that exists in the public root.
    ///
    /// Does nothing when the public root or the ledger is missing. A
    /// namespace without a ledger entry is never touched, and an entry
    /// whose directory is gone is kept. The ledger is rewritten once at
    /// the end, and only when an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem error. Trees deleted before the
    /// failure stay deleted and the ledger is left untouched.
    pub fn uninstall(&self, sources: &[PathBuf]) -> Result<SyncReport> {
        let mut report = SyncReport::new();
        if !self.public_dir.is_dir() || !self.ledger_path.is_file() {
            debug!(public_dir = %self.public_dir.display(), "Public root or ledger missing, nothing to uninstall");
            return Ok(report);
        }

        let mut ledger = Ledger::load(&self.ledger_path)?;

        for namespace in discover_namespaces(sources)? {
            let entry = namespace.ledger_entry();
            let target = self.public_dir.join(&namespace.name);

            if !ledger.contains(&entry) {
                debug!(namespace = %namespace.name, "Not recorded in ledger, leaving in place");
                continue;
            }
            if !target.is_dir() {
                debug!(namespace = %namespace.name, "Recorded but not present, keeping entry");
                continue;
            }

            io::remove_tree(&target)?;
            ledger.remove(&entry);
            debug!(namespace = %namespace.name, "Removed namespace");
            report.removed.push(namespace.name);
        }

        if !report.removed.is_empty() {
            ledger.save(&self.ledger_path)?;
        }
        info!(count = report.removed.len(), "Removed asset namespaces");
        Ok(report)
    }
}

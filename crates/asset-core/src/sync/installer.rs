use std::path::{Path, PathBuf};

use asset_fs::{NormalizedPath, io};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::discovery::{AssetNamespace, discover_namespaces};
use super::report::SyncReport;
use crate::ledger::Ledger;
use crate::{Error, Result};

/// Copies asset namespaces into the public root and records them in the
/// ledger.
#[derive(Debug, Clone)]
pub struct AssetInstaller {
    public_dir: PathBuf,
    ledger_path: NormalizedPath,
}

impl AssetInstaller {
    /// Create an installer targeting `public_dir`, with the ledger stored
    /// as `ignore_file` inside it.
    pub fn new(public_dir: impl Into<PathBuf>, ignore_file: &str) -> Self {
        let public_dir = public_dir.into();
        let ledger_path = NormalizedPath::new(public_dir.join(ignore_file));
        Self {
            public_dir,
            ledger_path,
        }
    }

    /// Install every namespace found under `sources`.
    ///
    /// Does nothing when the public root does not exist. The ledger is
    /// written once at the end, and only when an entry was added.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem error. Namespaces copied before the
    /// failure stay in place and the ledger is left untouched.
    pub fn install(&self, sources: &[PathBuf]) -> Result<SyncReport> {
        let mut report = SyncReport::new();
        if !self.public_dir.is_dir() {
            debug!(public_dir = %self.public_dir.display(), "Public root missing, nothing to install");
            return Ok(report);
        }

        let namespaces = discover_namespaces(sources)?;
        if namespaces.is_empty() {
            return Ok(report);
        }

        let mut ledger = Ledger::load_or_default(&self.ledger_path)?;
        let mut changed = false;

        for namespace in &namespaces {
            let files = self.copy_namespace(namespace)?;
            changed |= ledger.append(&namespace.ledger_entry());
            debug!(namespace = %namespace.name, files, "Installed namespace");
            report.installed.push(namespace.name.clone());
        }

        if changed {
            ledger.save(&self.ledger_path)?;
        }
        info!(count = report.installed.len(), "Installed asset namespaces");
        Ok(report)
    }

    /// Copy one namespace tree. Returns the number of files copied.
    fn copy_namespace(&self, namespace: &AssetNamespace) -> Result<usize> {
        let root = namespace.path();
        let destination = self.public_dir.join(&namespace.name);
        io::create_dir_all(&destination)?;

        let mut copied = 0;
        for entry in WalkDir::new(&root).min_depth(1).follow_links(false) {
            let entry = entry.map_err(|source| Error::Walk {
                path: root.clone(),
                source,
            })?;
            let relative = relative_to(&root, entry.path());
            let target = destination.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                io::create_dir_all(&target)?;
            } else if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                io::copy_file(entry.path(), &target)?;
                copied += 1;
            } else {
                debug!(path = %entry.path().display(), "Skipping symlinked directory or special file");
            }
        }
        Ok(copied)
    }
}

fn relative_to<'p>(root: &Path, path: &'p Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}

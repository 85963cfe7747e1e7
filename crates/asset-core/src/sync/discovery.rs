use std::fs;
use std::path::{Path, PathBuf};

use asset_fs::Error as FsError;
use tracing::debug;

use crate::Result;
use crate::ledger;

/// One immediate subdirectory of a declared source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNamespace {
    pub name: String,
    /// The source path the namespace was found under
    pub source: PathBuf,
}

impl AssetNamespace {
    /// Directory holding the namespace's files.
    pub fn path(&self) -> PathBuf {
        self.source.join(&self.name)
    }

    pub fn ledger_entry(&self) -> String {
        ledger::entry_for(&self.name)
    }
}

/// Resolve declared paths against the project root. Absolute paths are
/// kept as they are.
pub fn resolve_sources(project_root: &Path, declared: &[String]) -> Vec<PathBuf> {
    declared.iter().map(|p| project_root.join(p)).collect()
}

/// Find the namespaces under each source path, sources in the given order
/// and namespaces by name within a source.
///
/// Sources that are not directories are skipped. Symlinks to directories
/// count as namespaces. Names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns an error if a source directory cannot be listed.
pub fn discover_namespaces(sources: &[PathBuf]) -> Result<Vec<AssetNamespace>> {
    let mut namespaces = Vec::new();

    for source in sources {
        if !source.is_dir() {
            debug!(source = %source.display(), "Source path is not a directory, skipping");
            continue;
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(source).map_err(|e| FsError::io(source, e))? {
            let entry = entry.map_err(|e| FsError::io(source, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "Skipping non UTF-8 namespace"),
            }
        }
        names.sort();

        namespaces.extend(names.into_iter().map(|name| AssetNamespace {
            name,
            source: source.clone(),
        }));
    }

    Ok(namespaces)
}

//! Project-level settings

use std::path::{Path, PathBuf};

use asset_fs::{ConfigStore, NormalizedPath, ProjectPath};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// Where the asset manager looks for things inside a project.
///
/// Every field is optional in the settings file; absent fields keep their
/// defaults. Relative paths are resolved against the project root, except
/// `package_config` which is relative to a package's install path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Destination tree receiving asset namespaces
    pub public_dir: PathBuf,
    /// Ledger file name inside `public_dir`
    pub ignore_file: String,
    /// Directory packages are installed into
    pub vendor_dir: PathBuf,
    /// Package configuration file, relative to the install path
    pub package_config: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from(ProjectPath::PublicDir.as_str()),
            ignore_file: ProjectPath::IgnoreFile.as_str().to_string(),
            vendor_dir: PathBuf::from(ProjectPath::VendorDir.as_str()),
            package_config: PathBuf::from(ProjectPath::PackageConfig.as_str()),
        }
    }
}

impl Settings {
    /// Load settings from the first settings file present in
    /// `project_root`, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or
    /// parsed.
    pub fn discover(project_root: &Path) -> Result<Self> {
        for candidate in ProjectPath::settings_files() {
            let path = NormalizedPath::new(project_root.join(candidate.as_str()));
            if path.is_file() {
                debug!(path = %path, "Loading settings");
                return Ok(ConfigStore::new().load(&path)?);
            }
        }
        Ok(Self::default())
    }

    /// Absolute destination root for a project.
    pub fn public_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.public_dir)
    }

    /// Absolute vendor directory for a project.
    pub fn vendor_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.vendor_dir)
    }

    /// Configuration file of a package installed at `install_path`.
    pub fn package_config(&self, install_path: &Path) -> PathBuf {
        install_path.join(&self.package_config)
    }
}

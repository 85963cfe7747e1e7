use std::path::{Path, PathBuf};

use asset_fs::NormalizedPath;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use super::operation::{OperationQueue, PackageOperation};
use super::package::{Package, PackageLocator};
use crate::Result;
use crate::config::{ConfigInspection, Settings, inspect_package_config};
use crate::ledger::Ledger;
use crate::sync::{AssetInstaller, AssetUninstaller, SyncReport, resolve_sources};

/// Ledger entry and whether its directory is present in the public root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceStatus {
    pub name: String,
    pub present: bool,
}

/// Reacts to package operations by installing or removing their assets.
///
/// Operations run immediately through [`handle`](Self::handle), or are
/// queued with [`schedule`](Self::schedule) and run together by
/// [`flush`](Self::flush).
#[derive(Debug)]
pub struct AssetManager<L> {
    project_root: PathBuf,
    settings: Settings,
    locator: L,
    queue: OperationQueue,
}

impl<L: PackageLocator> AssetManager<L> {
    pub fn new(project_root: impl Into<PathBuf>, settings: Settings, locator: L) -> Self {
        Self {
            project_root: project_root.into(),
            settings,
            locator,
            queue: OperationQueue::new(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn public_dir(&self) -> PathBuf {
        self.settings.public_dir(&self.project_root)
    }

    fn ledger_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.public_dir().join(&self.settings.ignore_file))
    }

    /// Run an operation now.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be located or a filesystem
    /// operation fails. For an update, a failed uninstall stops before the
    /// install.
    pub fn handle(&self, operation: &PackageOperation) -> Result<SyncReport> {
        match operation {
            PackageOperation::Install(package) => self.install(package),
            PackageOperation::Uninstall(package) => self.uninstall(package),
            PackageOperation::Update { from, to } => {
                let mut report = self.uninstall(from)?;
                report.merge(self.install(to)?);
                Ok(report)
            }
        }
    }

    /// Queue an operation for the next [`flush`](Self::flush).
    pub fn schedule(&mut self, operation: PackageOperation) {
        self.queue.push(operation);
    }

    /// Number of queued package operations.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Run every queued operation, uninstalls first.
    ///
    /// A package that fails is logged and recorded in the report's
    /// `errors`; the remaining packages still run.
    pub fn flush(&mut self) -> SyncReport {
        let mut report = SyncReport::new();
        for operation in self.queue.drain() {
            match self.handle(&operation) {
                Ok(outcome) => report.merge(outcome),
                Err(e) => {
                    error!(%operation, error = %e, "Package operation failed");
                    report.errors.push(format!("{operation}: {e}"));
                }
            }
        }
        report
    }

    /// Install the assets declared by `package`.
    ///
    /// Without a public root this is a no-op: the package is not resolved
    /// and its configuration is not read.
    pub fn install(&self, package: &Package) -> Result<SyncReport> {
        if !self.public_dir().is_dir() {
            debug!(package = %package, "No public directory, skipping install");
            return Ok(SyncReport::new());
        }
        let sources = match self.declared_sources(package)? {
            Declared::Sources(sources) => sources,
            Declared::Skip(report) => return Ok(report),
        };
        let report = AssetInstaller::new(self.public_dir(), &self.settings.ignore_file)
            .install(&sources)?;
        if !report.installed.is_empty() {
            info!(package = %package, namespaces = ?report.installed, "Installed assets");
        }
        Ok(report)
    }

    /// Remove the assets declared by `package`.
    ///
    /// A no-op unless both the public root and its ledger exist.
    pub fn uninstall(&self, package: &Package) -> Result<SyncReport> {
        if !self.public_dir().is_dir() || !self.ledger_path().is_file() {
            debug!(package = %package, "No public directory or ledger, skipping uninstall");
            return Ok(SyncReport::new());
        }
        let sources = match self.declared_sources(package)? {
            Declared::Sources(sources) => sources,
            Declared::Skip(report) => return Ok(report),
        };
        let report = AssetUninstaller::new(self.public_dir(), &self.settings.ignore_file)
            .uninstall(&sources)?;
        if !report.removed.is_empty() {
            info!(package = %package, namespaces = ?report.removed, "Removed assets");
        }
        Ok(report)
    }

    /// Inspect a package's configuration without touching the public root.
    pub fn inspect(&self, package: &Package) -> Result<(PathBuf, ConfigInspection)> {
        let config_path = self.config_path(package)?;
        let inspection = inspect_package_config(&config_path)?;
        Ok((config_path, inspection))
    }

    /// Namespaces recorded in the ledger, in ledger order.
    pub fn status(&self) -> Result<Vec<NamespaceStatus>> {
        let ledger = Ledger::load_or_default(&self.ledger_path())?;
        let public_dir = self.public_dir();
        Ok(ledger
            .entries()
            .map(|name| NamespaceStatus {
                name: name.to_string(),
                present: public_dir.join(name).is_dir(),
            })
            .collect())
    }

    fn config_path(&self, package: &Package) -> Result<PathBuf> {
        let install_path = self.locator.install_path(package)?;
        let install_path = if install_path.is_absolute() {
            install_path
        } else {
            self.project_root.join(install_path)
        };
        Ok(self.settings.package_config(&install_path))
    }

    /// Resolved source paths for a package. Unsafe configuration skips the
    /// package with a warning.
    fn declared_sources(&self, package: &Package) -> Result<Declared> {
        let (config_path, inspection) = self.inspect(package)?;
        let mut report = SyncReport::new();
        match inspection {
            ConfigInspection::Declared(paths) => {
                return Ok(Declared::Sources(resolve_sources(&self.project_root, &paths)));
            }
            ConfigInspection::Unsafe(construct) => {
                let message = format!(
                    "Unable to check for asset configuration in {}: {}",
                    config_path.display(),
                    construct
                );
                warn!(package = %package, "{message}");
                report.warn(message);
            }
            ConfigInspection::Missing | ConfigInspection::NoAssetConfig => {}
        }
        Ok(Declared::Skip(report))
    }
}

enum Declared {
    Sources(Vec<PathBuf>),
    /// Nothing to copy or remove; the report carries any warning
    Skip(SyncReport),
}

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Identity of an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Package {
    pub name: String,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Resolves where a package is installed.
pub trait PackageLocator {
    /// Install path of `package`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PackageNotFound`] when the package cannot be
    /// resolved.
    fn install_path(&self, package: &Package) -> Result<PathBuf>;
}

/// Packages live in `<vendor_dir>/<name>`.
#[derive(Debug, Clone)]
pub struct VendorLocator {
    vendor_dir: PathBuf,
}

impl VendorLocator {
    pub fn new(vendor_dir: impl Into<PathBuf>) -> Self {
        Self {
            vendor_dir: vendor_dir.into(),
        }
    }

    pub fn vendor_dir(&self) -> &Path {
        &self.vendor_dir
    }
}

impl PackageLocator for VendorLocator {
    fn install_path(&self, package: &Package) -> Result<PathBuf> {
        let path = self.vendor_dir.join(&package.name);
        if !path.exists() {
            return Err(Error::package_not_found(&package.name));
        }
        if !path.is_dir() {
            return Err(Error::InvalidInstallPath {
                name: package.name.clone(),
                path,
            });
        }
        Ok(path)
    }
}

/// Explicit name to path mapping.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
    paths: HashMap<String, PathBuf>,
}

impl StaticLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(name, path);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.paths.insert(name.into(), path.into());
    }
}

impl PackageLocator for StaticLocator {
    fn install_path(&self, package: &Package) -> Result<PathBuf> {
        self.paths
            .get(&package.name)
            .cloned()
            .ok_or_else(|| Error::package_not_found(&package.name))
    }
}

impl<L: PackageLocator + ?Sized> PackageLocator for &L {
    fn install_path(&self, package: &Package) -> Result<PathBuf> {
        (**self).install_path(package)
    }
}

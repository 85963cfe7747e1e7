//! Error types for asset-core

use std::path::PathBuf;

/// Result type for asset-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in asset-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A package could not be resolved to an install path
    #[error("Package not found: {name}")]
    PackageNotFound { name: String },

    /// A package resolved to a path that is not a directory
    #[error("Install path for {name} is not a directory: {path}")]
    InvalidInstallPath { name: String, path: PathBuf },

    /// Directory traversal failed below a namespace
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from asset-fs
    #[error(transparent)]
    Fs(#[from] asset_fs::Error),
}

impl Error {
    pub fn package_not_found(name: impl Into<String>) -> Self {
        Self::PackageNotFound { name: name.into() }
    }
}

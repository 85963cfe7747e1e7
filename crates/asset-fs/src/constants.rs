//! Well-known project paths.

use std::path::Path;

/// Default locations used when a project does not override them in its
/// settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The public document root that receives asset namespaces
    PublicDir,
    /// The ignore file inside the public root that doubles as the ledger
    IgnoreFile,
    /// The directory packages are installed into
    VendorDir,
    /// Package configuration, relative to a package's install path
    PackageConfig,
    /// Project settings file (TOML flavour)
    SettingsToml,
    /// Project settings file (JSON flavour)
    SettingsJson,
    /// Project settings file (YAML flavour)
    SettingsYaml,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicDir => "public",
            Self::IgnoreFile => ".gitignore",
            Self::VendorDir => "vendor",
            Self::PackageConfig => "config/module.config.php",
            Self::SettingsToml => ".asset-manager.toml",
            Self::SettingsJson => ".asset-manager.json",
            Self::SettingsYaml => ".asset-manager.yaml",
        }
    }

    /// Settings file candidates, in lookup order.
    pub fn settings_files() -> [Self; 3] {
        [Self::SettingsToml, Self::SettingsJson, Self::SettingsYaml]
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Package configuration extraction
//!
//! A package declares its asset directories under
//! `asset_manager -> resolver_configs -> paths` in its configuration file.
//! [`inspect_package_config`] runs the full pipeline: existence check,
//! cheap pre-filter, safety classification, then static evaluation.

pub mod loader;
pub mod settings;
pub mod value;

pub use loader::evaluate;
pub use settings::Settings;
pub use value::{ArrayKey, ConfigArray, ConfigValue};

use std::path::Path;

use asset_fs::{NormalizedPath, io};
use tracing::debug;

use crate::Result;
use crate::classifier::{self, Classification, UnsafeConstruct};

/// Key path of the declared source directories.
const PATHS_KEY: [&str; 3] = ["asset_manager", "resolver_configs", "paths"];

/// Loads configuration files by static evaluation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate already-read configuration source.
    ///
    /// Callers must classify `source` first; the loader assumes it is safe.
    pub fn load(&self, source: &str, file: &Path) -> ConfigValue {
        evaluate(source, file)
    }
}

/// Extract the declared source paths from a loaded configuration.
///
/// Returns `None` when the structure is absent or malformed: any missing
/// key, or a `paths` value that is not an array of strings. Keys of the
/// `paths` array are ignored and value order is kept.
pub fn declared_paths(value: &ConfigValue) -> Option<Vec<String>> {
    let paths = value.get_path(&PATHS_KEY)?.as_array()?;
    paths
        .values()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Result of inspecting a package's configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigInspection {
    /// The configuration file does not exist
    Missing,
    /// The file does not declare asset configuration, or the declaration
    /// is malformed
    NoAssetConfig,
    /// The file uses a construct that makes it unsafe to load
    Unsafe(UnsafeConstruct),
    /// Declared source paths, in declaration order
    Declared(Vec<String>),
}

impl ConfigInspection {
    /// Declared paths, if any.
    pub fn paths(&self) -> Option<&[String]> {
        match self {
            Self::Declared(paths) => Some(paths),
            _ => None,
        }
    }
}

/// Inspect a package configuration file.
///
/// # Errors
///
/// Returns an error only when an existing file cannot be read.
pub fn inspect_package_config(path: &Path) -> Result<ConfigInspection> {
    if !path.is_file() {
        debug!(path = %path.display(), "No package configuration");
        return Ok(ConfigInspection::Missing);
    }

    let source = io::read_text(&NormalizedPath::new(path))?;
    if !classifier::declares_asset_config(&source) {
        debug!(path = %path.display(), "No asset configuration declared");
        return Ok(ConfigInspection::NoAssetConfig);
    }

    if let Classification::Unsafe(construct) = classifier::classify(&source) {
        return Ok(ConfigInspection::Unsafe(construct));
    }

    let value = ConfigLoader::new().load(&source, path);
    Ok(match declared_paths(&value) {
        Some(paths) => ConfigInspection::Declared(paths),
        None => ConfigInspection::NoAssetConfig,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paths_of(source: &str) -> Option<Vec<String>> {
        declared_paths(&evaluate(source, Path::new("/pkg/config/module.config.php")))
    }

    #[test]
    fn extracts_paths_in_order() {
        let source = r#"<?php
return [
    'asset_manager' => [
        'resolver_configs' => [
            'paths' => [
                'b' => __DIR__ . '/../public',
                'a' => "assets",
            ],
        ],
    ],
];"#;
        assert_eq!(
            paths_of(source),
            Some(vec!["/pkg/config/../public".to_string(), "assets".to_string()])
        );
    }

    #[test]
    fn malformed_structures_yield_none() {
        assert_eq!(paths_of("<?php return [];"), None);
        assert_eq!(paths_of("<?php return 'x';"), None);
        assert_eq!(
            paths_of("<?php return ['asset_manager' => ['resolver_configs' => ['paths' => 'x']]];"),
            None
        );
        assert_eq!(
            paths_of("<?php return ['asset_manager' => ['resolver_configs' => ['paths' => ['a', 3]]]];"),
            None
        );
        assert_eq!(
            paths_of("<?php return ['asset_manager' => ['resolver_configs' => ['paths' => [getenv('X')]]]];"),
            None
        );
    }

    #[test]
    fn empty_paths_array_is_declared_but_empty() {
        assert_eq!(
            paths_of("<?php return ['asset_manager' => ['resolver_configs' => ['paths' => []]]];"),
            Some(vec![])
        );
    }
}

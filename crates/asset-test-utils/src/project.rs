//! [`TestProject`] builder for asset-manager test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory inside a package that test assets are written to.
pub const ASSET_DIR: &str = "asset";

/// Package configuration declaring `paths` (relative to the package root)
/// the way real packages do, through `__DIR__`.
pub fn asset_config(paths: &[&str]) -> String {
    let entries: Vec<String> = paths
        .iter()
        .map(|p| format!("__DIR__ . '/../{p}'"))
        .collect();
    asset_config_raw(&entries)
}

/// Package configuration with `entries` inserted verbatim into the `paths`
/// array.
pub fn asset_config_raw(entries: &[String]) -> String {
    let mut source = String::from(
        "<?php\nreturn [\n    'asset_manager' => [\n        'resolver_configs' => [\n            'paths' => [\n",
    );
    for entry in entries {
        source.push_str(&format!("                {entry},\n"));
    }
    source.push_str("            ],\n        ],\n    ],\n];\n");
    source
}

/// A temporary project directory with helpers for laying out packages and
/// checking the public root.
///
/// # Example
///
/// ```rust,no_run
/// use asset_test_utils::TestProject;
///
/// let project = TestProject::new().with_public_dir();
/// project.add_asset_package("acme/widget", &[("widget/css/site.css", "body {}")]);
/// project.assert_file_exists("vendor/acme/widget/asset/widget/css/site.css");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create the `public` directory.
    pub fn with_public_dir(self) -> Self {
        fs::create_dir_all(self.public_dir()).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn public_dir(&self) -> PathBuf {
        self.path("public")
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.path("vendor")
    }

    /// Install path of a vendored package.
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.vendor_dir().join(name)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create a vendored package whose configuration file holds `config`.
    pub fn add_package(&self, name: &str, config: &str) -> PathBuf {
        let dir = self.package_dir(name);
        fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("config/module.config.php");
        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(config_path, config).unwrap();
        dir
    }

    /// Create a vendored package declaring its `asset` directory, with
    /// `files` given as `(path below asset/, content)`.
    pub fn add_asset_package(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.add_package(name, &asset_config(&[ASSET_DIR]));
        fs::create_dir_all(dir.join(ASSET_DIR)).unwrap();
        for (relative, content) in files {
            let path = dir.join(ASSET_DIR).join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    /// Ledger content, `None` when the ledger file is absent.
    pub fn ledger(&self) -> Option<String> {
        fs::read_to_string(self.public_dir().join(".gitignore")).ok()
    }

    pub fn write_ledger(&self, content: &str) {
        self.write_file("public/.gitignore", content);
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `relative` does **not** exist.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }
}

//! Slash-normalized paths

use std::fmt;
use std::path::{Path, PathBuf};

/// Path stored with `/` separators.
///
/// Ledgers, settings files and package configuration are addressed through
/// this type so error messages and log fields render the same on every
/// platform. I/O goes through [`NormalizedPath::to_native`].
///
/// Only Windows separators are rewritten. On Unix `\` is an ordinary
/// file name character and is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_string_lossy();
        #[cfg(windows)]
        let path = path.replace('\\', "/");
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Last non-empty segment.
    pub fn file_name(&self) -> Option<&str> {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }

    /// Text after the last `.` of the file name. A leading dot does not
    /// start an extension, so `.gitignore` has none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(dot) => Some(&name[dot + 1..]),
        }
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.0).exists()
    }

    pub fn is_dir(&self) -> bool {
        Path::new(&self.0).is_dir()
    }

    pub fn is_file(&self) -> bool {
        Path::new(&self.0).is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

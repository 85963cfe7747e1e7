//! Locked atomic writes and the tree helpers used by the synchronizers

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::trace;

use crate::{Error, NormalizedPath, Result};

/// Permission bits for directories created under the public root.
#[cfg(unix)]
const DIR_MODE: u32 = 0o775;

/// Write content atomically to a file with locking.
///
/// Holds an exclusive advisory lock on the target while the content is
/// written to a sibling temp file, then renames the temp file over the
/// target. Readers using [`read_text_shared`] never observe a partial write.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;
    lock_file
        .lock_exclusive()
        .map_err(|e| Error::lock(&native_path, e))?;

    // Same directory, so the rename never crosses filesystems
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, &native_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&native_path, e));
    }

    trace!(path = %native_path.display(), bytes = content.len(), "Atomic write");
    // Lock released when lock_file is dropped
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content while holding a shared advisory lock.
///
/// Reads through the locked handle so the content cannot change between
/// acquiring the lock and reading.
pub fn read_text_shared(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let file = File::open(&native_path).map_err(|e| Error::io(&native_path, e))?;
    file.lock_shared()
        .map_err(|e| Error::lock(&native_path, e))?;

    let mut content = String::new();
    (&file)
        .read_to_string(&mut content)
        .map_err(|e| Error::io(&native_path, e))?;
    Ok(content)
}

/// Create a directory and all missing parents.
///
/// On Unix the created directories get mode `0775` (before umask).
pub fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path).map_err(|e| Error::io(path, e))
}

/// Copy a single file byte-for-byte, creating the destination's parent
/// directories on demand. Returns the number of bytes copied.
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    if let Some(parent) = destination.parent()
        && !parent.is_dir()
    {
        create_dir_all(parent)?;
    }
    fs::copy(source, destination).map_err(|e| Error::io(destination, e))
}

/// Recursively delete a directory tree, then the directory itself.
pub fn remove_tree(path: &Path) -> Result<()> {
    trace!(path = %path.display(), "Removing tree");
    fs::remove_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Resolve a path to its canonical form without the `\\?\` prefix on Windows.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_atomic_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join(".gitignore"));

        write_atomic(&path, b"widget/\n").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp file should be renamed away");
    }

    #[cfg(unix)]
    #[test]
    fn create_dir_all_uses_group_writable_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        create_dir_all(&dir).unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // umask may strip bits, never add them
        assert_eq!(mode & !DIR_MODE, 0);
        assert!(mode & 0o700 == 0o700);
    }
}

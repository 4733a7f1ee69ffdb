//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use plinth_core::application::error::{ApplicationError, CoreResult};
use plinth_core::application::ports::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn erase_dir(&self, path: &Path) -> CoreResult<()> {
        match std::fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            // Idempotent: nothing to erase is fine.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove directory")),
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ApplicationError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn erase_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("never-created");

        let fs = LocalFilesystem::new();
        assert!(fs.erase_dir(&target).is_ok());
        assert!(fs.erase_dir(&target).is_ok());
    }

    #[test]
    fn erase_dir_removes_contents_recursively() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("project");
        std::fs::create_dir_all(target.join("src")).unwrap();
        std::fs::write(target.join("src/index.js"), "console.log(1)").unwrap();

        let fs = LocalFilesystem::new();
        fs.erase_dir(&target).unwrap();

        assert!(!fs.exists(&target));
    }

    #[test]
    fn create_dir_all_then_exists() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/c");

        let fs = LocalFilesystem::new();
        fs.create_dir_all(&target).unwrap();

        assert!(fs.exists(&target));
    }
}

//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use libris_core::{application::ports::Filesystem, error::LibrisResult};

/// Production filesystem implementation using `std::fs`.
///
/// Writes go straight to the target file; they are not atomic.
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
    fn read_to_string(&self, path: &Path) -> LibrisResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "read file")),
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> LibrisResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> LibrisResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> libris_core::error::LibrisError {
    use libris_core::application::ApplicationError;

    ApplicationError::Storage {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        assert_eq!(fs.read_to_string(&dir.path().join("nope.json")).unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "[]").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "[1, 2, 3]").unwrap();
        fs.write_file(&path, "[]").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_into_missing_directory_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("books.json");

        let err = LocalFilesystem::new().write_file(&path, "[]").unwrap_err();

        assert!(err.to_string().contains("write file"));
    }
}

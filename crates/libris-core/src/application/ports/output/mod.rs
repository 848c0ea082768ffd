//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `libris-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Book, User};
use crate::error::LibrisResult;

/// Port for raw file access.
///
/// Implemented by:
/// - `libris_adapters::filesystem::LocalFilesystem` (production)
/// - `libris_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8. `Ok(None)` when the file does not exist.
    fn read_to_string(&self, path: &Path) -> LibrisResult<Option<String>>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> LibrisResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LibrisResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for whole-collection persistence.
///
/// Every `save_*` call replaces the entire stored collection; there is no
/// append or partial update. `load_*` returns an empty vector when nothing
/// has been stored yet.
///
/// Implemented by:
/// - `libris_adapters::storage::JsonFileStorage` (`books.json` / `users.json`)
#[cfg_attr(test, mockall::automock)]
pub trait CatalogStorage: Send + Sync {
    /// Load every stored book, in stored order.
    fn load_books(&self) -> LibrisResult<Vec<Book>>;

    /// Overwrite the stored books with `books`.
    fn save_books(&self, books: &[Book]) -> LibrisResult<()>;

    /// Load every stored user, in stored order.
    fn load_users(&self) -> LibrisResult<Vec<User>>;

    /// Overwrite the stored users with `users`.
    fn save_users(&self, users: &[User]) -> LibrisResult<()>;
}

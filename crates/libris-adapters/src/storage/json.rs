//! JSON file storage: one pretty-printed JSON array per collection.
//!
//! Loading reads the whole file; saving serialises the whole collection and
//! overwrites the file. A missing file, an empty file, and the literal
//! `null` all load as an empty collection. A leading byte-order mark is
//! skipped. Anything else that fails to parse is reported as
//! [`ApplicationError::Corrupt`].

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use libris_core::{
    application::{
        ApplicationError,
        ports::{CatalogStorage, Filesystem},
    },
    domain::{Book, User},
    error::LibrisResult,
};

/// File name of the book collection inside the data directory.
pub const DEFAULT_BOOKS_FILE: &str = "books.json";

/// File name of the user collection inside the data directory.
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// [`CatalogStorage`] backed by two JSON files.
pub struct JsonFileStorage {
    fs: Box<dyn Filesystem>,
    books_path: PathBuf,
    users_path: PathBuf,
}

impl JsonFileStorage {
    /// Storage using explicit file paths.
    pub fn new(
        fs: Box<dyn Filesystem>,
        books_path: impl Into<PathBuf>,
        users_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            books_path: books_path.into(),
            users_path: users_path.into(),
        }
    }

    /// Storage using `books.json` and `users.json` inside `dir`.
    pub fn in_dir(fs: Box<dyn Filesystem>, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            fs,
            dir.join(DEFAULT_BOOKS_FILE),
            dir.join(DEFAULT_USERS_FILE),
        )
    }

    pub fn books_path(&self) -> &Path {
        &self.books_path
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    #[instrument(skip(self, path), fields(path = %path.display()))]
    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> LibrisResult<Vec<T>> {
        let Some(content) = self.fs.read_to_string(path)? else {
            debug!("No data file yet, starting empty");
            return Ok(Vec::new());
        };

        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        if content.trim().is_empty() {
            debug!("Data file is empty, starting empty");
            return Ok(Vec::new());
        }

        let records: Option<Vec<T>> =
            serde_json::from_str(content).map_err(|e| ApplicationError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let records = records.unwrap_or_default();
        trace!(count = records.len(), "Data file parsed");
        Ok(records)
    }

    #[instrument(skip(self, path, records), fields(path = %path.display(), count = records.len()))]
    fn save_collection<T: Serialize>(&self, path: &Path, records: &[T]) -> LibrisResult<()> {
        let json = serde_json::to_string_pretty(records).map_err(|e| ApplicationError::Encoding {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.fs.exists(parent) {
                self.fs.create_dir_all(parent)?;
            }
        }

        self.fs.write_file(path, &json)?;
        trace!("Data file written");
        Ok(())
    }
}

impl CatalogStorage for JsonFileStorage {
    fn load_books(&self) -> LibrisResult<Vec<Book>> {
        self.load_collection(&self.books_path)
    }

    fn save_books(&self, books: &[Book]) -> LibrisResult<()> {
        self.save_collection(&self.books_path, books)
    }

    fn load_users(&self) -> LibrisResult<Vec<User>> {
        self.load_collection(&self.users_path)
    }

    fn save_users(&self, users: &[User]) -> LibrisResult<()> {
        self.save_collection(&self.users_path, users)
    }
}

#[cfg(test)]
mod tests {
    use libris_core::{domain::EntityId, error::ErrorCategory};

    use super::*;
    use crate::MemoryFilesystem;

    fn storage(fs: &MemoryFilesystem) -> JsonFileStorage {
        JsonFileStorage::new(Box::new(fs.clone()), "books.json", "users.json")
    }

    #[test]
    fn in_dir_uses_default_file_names() {
        let storage = JsonFileStorage::in_dir(Box::new(MemoryFilesystem::new()), "data");

        assert_eq!(storage.books_path(), Path::new("data/books.json"));
        assert_eq!(storage.users_path(), Path::new("data/users.json"));
    }

    #[test]
    fn missing_files_load_empty() {
        let fs = MemoryFilesystem::new();
        let storage = storage(&fs);

        assert!(storage.load_books().unwrap().is_empty());
        assert!(storage.load_users().unwrap().is_empty());
    }

    #[test]
    fn empty_and_null_files_load_empty() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("books.json", "  \n");
        fs.insert_file("users.json", "null");
        let storage = storage(&fs);

        assert!(storage.load_books().unwrap().is_empty());
        assert!(storage.load_users().unwrap().is_empty());
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("books.json", "\u{feff}[]");
        fs.insert_file(
            "users.json",
            "\u{feff}[{\"Id\": 2, \"Name\": \"Ann\", \"Email\": \"a@x\"}]",
        );
        let storage = storage(&fs);

        assert!(storage.load_books().unwrap().is_empty());
        assert_eq!(
            storage.load_users().unwrap(),
            vec![User::new(EntityId::new(2), "Ann", "a@x")]
        );
    }

    #[test]
    fn null_string_fields_load_as_empty() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("users.json", r#"[{"Id": 5, "Name": null, "Email": null}]"#);
        fs.insert_file(
            "books.json",
            r#"[{"Id": 3, "Title": null, "Author": "Herbert", "YearPublished": 1965}]"#,
        );
        let storage = storage(&fs);

        assert_eq!(
            storage.load_users().unwrap(),
            vec![User::new(EntityId::new(5), "", "")]
        );
        assert_eq!(
            storage.load_books().unwrap(),
            vec![Book::new(EntityId::new(3), "", "Herbert", 1965)]
        );
    }

    #[test]
    fn missing_fields_load_as_defaults() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("books.json", r#"[{"Title": "Dune"}]"#);
        fs.insert_file("users.json", r#"[{"Id": 4, "Name": "Ann"}]"#);
        let storage = storage(&fs);

        assert_eq!(
            storage.load_books().unwrap(),
            vec![Book::new(EntityId::new(0), "Dune", "", 0)]
        );
        assert_eq!(
            storage.load_users().unwrap(),
            vec![User::new(EntityId::new(4), "Ann", "")]
        );
    }

    #[test]
    fn corrupt_file_is_reported() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("books.json", "{ not json");

        let err = storage(&fs).load_books().unwrap_err();

        assert_eq!(err.category(), ErrorCategory::CorruptData);
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("users.json", r#"{"Id": 1, "Name": "Ann", "Email": "a@x"}"#);

        assert!(storage(&fs).load_users().is_err());
    }

    #[test]
    fn books_are_written_pretty_with_pascal_case_keys() {
        let fs = MemoryFilesystem::new();
        let book = Book::new(EntityId::new(1), "Dune", "Herbert", 1965);

        storage(&fs).save_books(&[book]).unwrap();

        let written = fs.read_file(Path::new("books.json")).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"Id\": 1,\n    \"Title\": \"Dune\",\n    \"Author\": \"Herbert\",\n    \"YearPublished\": 1965\n  }\n]"
        );
    }

    #[test]
    fn empty_collection_is_written_as_empty_array() {
        let fs = MemoryFilesystem::new();

        storage(&fs).save_users(&[]).unwrap();

        assert_eq!(fs.read_file(Path::new("users.json")).as_deref(), Some("[]"));
    }

    #[test]
    fn order_and_duplicates_survive_round_trip() {
        let fs = MemoryFilesystem::new();
        let books = vec![
            Book::new(EntityId::new(5), "A", "X", 1),
            Book::new(EntityId::new(7), "B", "Y", 2),
            Book::new(EntityId::new(5), "C", "Z", 3),
        ];

        storage(&fs).save_books(&books).unwrap();

        assert_eq!(storage(&fs).load_books().unwrap(), books);
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let fs = MemoryFilesystem::new();
        let storage = JsonFileStorage::in_dir(Box::new(fs.clone()), "data");

        storage.save_books(&[]).unwrap();

        assert!(fs.exists(Path::new("data")));
        assert!(fs.read_file(Path::new("data/books.json")).is_some());
    }

    #[test]
    fn write_failure_is_storage_error() {
        let fs = MemoryFilesystem::new();
        fs.set_read_only(true);

        let err = storage(&fs).save_books(&[]).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}

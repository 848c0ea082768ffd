//! Library Service - the catalog store.
//!
//! Owns the authoritative in-memory books and users and mirrors every
//! mutation to the [`CatalogStorage`] port.
//!
//! ## Contract
//!
//! - Both collections are loaded once, in [`LibraryService::open`].
//! - Every mutation rewrites the full affected collection before returning.
//! - If the write fails the in-memory collection is left as it was, so
//!   memory and storage never disagree.
//! - Readers get `&[T]` views; the only way to change a collection is through
//!   the methods below.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::CatalogStorage,
    domain::{Book, EntityId, User},
    error::LibrisResult,
};

/// In-memory catalog backed by whole-collection persistence.
pub struct LibraryService {
    storage: Box<dyn CatalogStorage>,
    books: Vec<Book>,
    users: Vec<User>,
}

impl LibraryService {
    /// Load both collections from `storage`.
    #[instrument(skip_all)]
    pub fn open(storage: Box<dyn CatalogStorage>) -> LibrisResult<Self> {
        let books = storage.load_books()?;
        let users = storage.load_users()?;

        info!(books = books.len(), users = users.len(), "Catalog loaded");

        Ok(Self {
            storage,
            books,
            users,
        })
    }

    // ── Books ────────────────────────────────────────────────────────────────

    /// Append `book` and persist the full book collection.
    ///
    /// Ids are not checked for uniqueness.
    #[instrument(skip_all, fields(id = %book.id))]
    pub fn add_book(&mut self, book: Book) -> LibrisResult<()> {
        self.books.push(book);

        if let Err(e) = self.storage.save_books(&self.books) {
            self.books.pop();
            return Err(e);
        }

        debug!(total = self.books.len(), "Book added");
        Ok(())
    }

    /// Remove every book whose id equals `id` and persist.
    ///
    /// The collection is rewritten even when nothing matched. Returns the
    /// number of removed books.
    #[instrument(skip(self))]
    pub fn remove_book(&mut self, id: EntityId) -> LibrisResult<usize> {
        let kept: Vec<Book> = self.books.iter().filter(|b| b.id != id).cloned().collect();
        let removed = self.books.len() - kept.len();

        self.storage.save_books(&kept)?;
        self.books = kept;

        debug!(removed, total = self.books.len(), "Books removed");
        Ok(removed)
    }

    /// Read-only view of the books, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Id for the next book: one past the largest id in the collection.
    pub fn next_book_id(&self) -> LibrisResult<EntityId> {
        Ok(EntityId::next_after(self.books.iter().map(|b| b.id))?)
    }

    // ── Users ────────────────────────────────────────────────────────────────

    /// Append `user` and persist the full user collection.
    #[instrument(skip_all, fields(id = %user.id))]
    pub fn add_user(&mut self, user: User) -> LibrisResult<()> {
        self.users.push(user);

        if let Err(e) = self.storage.save_users(&self.users) {
            self.users.pop();
            return Err(e);
        }

        debug!(total = self.users.len(), "User added");
        Ok(())
    }

    /// Read-only view of the users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Id for the next user: one past the largest id in the collection.
    pub fn next_user_id(&self) -> LibrisResult<EntityId> {
        Ok(EntityId::next_after(self.users.iter().map(|u| u.id))?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::predicate::always;

    use super::*;
    use crate::application::{ApplicationError, ports::MockCatalogStorage};

    fn book(id: i32, title: &str) -> Book {
        Book::new(EntityId::new(id), title, "Author", 2000)
    }

    fn ids(books: &[Book]) -> Vec<i32> {
        books.iter().map(|b| b.id.get()).collect()
    }

    fn storage_with(books: Vec<Book>, users: Vec<User>) -> MockCatalogStorage {
        let mut storage = MockCatalogStorage::new();
        storage
            .expect_load_books()
            .times(1)
            .return_once(move || Ok(books));
        storage
            .expect_load_users()
            .times(1)
            .return_once(move || Ok(users));
        storage
    }

    fn write_failure() -> crate::error::LibrisError {
        ApplicationError::Storage {
            path: PathBuf::from("books.json"),
            reason: "disk full".into(),
        }
        .into()
    }

    #[test]
    fn open_loads_both_collections() {
        let storage = storage_with(
            vec![book(1, "A"), book(2, "B")],
            vec![User::new(EntityId::new(1), "Ann", "a@x")],
        );

        let library = LibraryService::open(Box::new(storage)).unwrap();

        assert_eq!(ids(library.books()), vec![1, 2]);
        assert_eq!(library.users().len(), 1);
    }

    #[test]
    fn open_propagates_load_failure() {
        let mut storage = MockCatalogStorage::new();
        storage.expect_load_books().return_once(|| {
            Err(ApplicationError::Corrupt {
                path: PathBuf::from("books.json"),
                reason: "expected value at line 1".into(),
            }
            .into())
        });

        assert!(LibraryService::open(Box::new(storage)).is_err());
    }

    #[test]
    fn add_book_persists_full_collection_in_order() {
        let mut storage = storage_with(vec![book(1, "A")], vec![]);
        storage
            .expect_save_books()
            .withf(|books: &[Book]| {
                books.len() == 2 && books[0].title == "A" && books[1].title == "B"
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();
        library.add_book(book(2, "B")).unwrap();

        assert_eq!(ids(library.books()), vec![1, 2]);
    }

    #[test]
    fn add_book_keeps_duplicate_ids() {
        let mut storage = storage_with(vec![book(5, "A")], vec![]);
        storage.expect_save_books().returning(|_| Ok(()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();
        library.add_book(book(5, "Again")).unwrap();

        assert_eq!(ids(library.books()), vec![5, 5]);
    }

    #[test]
    fn add_book_rolls_back_when_save_fails() {
        let mut storage = storage_with(vec![book(1, "A")], vec![]);
        storage
            .expect_save_books()
            .times(1)
            .returning(|_| Err(write_failure()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();

        assert!(library.add_book(book(2, "B")).is_err());
        assert_eq!(ids(library.books()), vec![1]);
    }

    #[test]
    fn remove_book_removes_every_match() {
        let mut storage = storage_with(vec![book(5, "A"), book(7, "B"), book(5, "C")], vec![]);
        storage
            .expect_save_books()
            .withf(|books: &[Book]| books.len() == 1 && books[0].id == EntityId::new(7))
            .times(1)
            .returning(|_| Ok(()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();
        let removed = library.remove_book(EntityId::new(5)).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(ids(library.books()), vec![7]);
    }

    #[test]
    fn remove_missing_id_still_rewrites() {
        let mut storage = storage_with(vec![book(1, "A"), book(2, "B")], vec![]);
        storage
            .expect_save_books()
            .with(always())
            .times(1)
            .returning(|_| Ok(()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();
        let removed = library.remove_book(EntityId::new(99)).unwrap();

        assert_eq!(removed, 0);
        assert_eq!(ids(library.books()), vec![1, 2]);
    }

    #[test]
    fn remove_book_keeps_memory_when_save_fails() {
        let mut storage = storage_with(vec![book(1, "A")], vec![]);
        storage
            .expect_save_books()
            .returning(|_| Err(write_failure()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();

        assert!(library.remove_book(EntityId::new(1)).is_err());
        assert_eq!(ids(library.books()), vec![1]);
    }

    #[test]
    fn add_user_persists_only_users() {
        let mut storage = storage_with(vec![], vec![]);
        storage.expect_save_books().never();
        storage
            .expect_save_users()
            .withf(|users: &[User]| users.len() == 1 && users[0].name == "Ann")
            .times(1)
            .returning(|_| Ok(()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();
        library
            .add_user(User::new(EntityId::new(1), "Ann", "ann@example.com"))
            .unwrap();

        assert_eq!(library.users().len(), 1);
    }

    #[test]
    fn add_user_rolls_back_when_save_fails() {
        let mut storage = storage_with(vec![], vec![]);
        storage
            .expect_save_users()
            .returning(|_| Err(write_failure()));

        let mut library = LibraryService::open(Box::new(storage)).unwrap();

        assert!(
            library
                .add_user(User::new(EntityId::new(1), "Ann", "a@x"))
                .is_err()
        );
        assert!(library.users().is_empty());
    }

    #[test]
    fn next_ids_follow_the_largest_existing_id() {
        let storage = storage_with(
            vec![book(3, "A"), book(12, "B")],
            vec![User::new(EntityId::new(4), "Ann", "a@x")],
        );

        let library = LibraryService::open(Box::new(storage)).unwrap();

        assert_eq!(library.next_book_id().unwrap(), EntityId::new(13));
        assert_eq!(library.next_user_id().unwrap(), EntityId::new(5));
    }

    #[test]
    fn next_ids_start_at_one_for_empty_catalog() {
        let library = LibraryService::open(Box::new(storage_with(vec![], vec![]))).unwrap();

        assert_eq!(library.next_book_id().unwrap(), EntityId::FIRST);
        assert_eq!(library.next_user_id().unwrap(), EntityId::FIRST);
    }
}

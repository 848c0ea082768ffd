//! Libris Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Libris
//! personal library catalog, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           libris-cli (Shell)            │
//! │     (Drives the library service)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (LibraryService)             │
//! │   In-memory books/users, persisted      │
//! │        after every mutation             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: CatalogStorage, Filesystem)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      libris-adapters (Infrastructure)   │
//! │ (JsonFileStorage, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │          (Book, User, EntityId)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libris_core::{
//!     application::LibraryService,
//!     domain::Book,
//! };
//! # fn demo(storage: Box<dyn libris_core::application::ports::CatalogStorage>) {
//!
//! // `storage` is any `CatalogStorage` adapter, e.g. `JsonFileStorage`.
//! let mut library = LibraryService::open(storage).unwrap();
//!
//! let id = library.next_book_id().unwrap();
//! library.add_book(Book::new(id, "Dune", "Herbert", 1965)).unwrap();
//!
//! for book in library.books() {
//!     println!("{book}");
//! }
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LibraryService,
        ports::{CatalogStorage, Filesystem},
    };
    pub use crate::domain::{Book, EntityId, User};
    pub use crate::error::{LibrisError, LibrisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

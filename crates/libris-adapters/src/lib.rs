//! Infrastructure adapters for Libris.
//!
//! This crate implements the ports defined in `libris-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod storage;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use storage::{DEFAULT_BOOKS_FILE, DEFAULT_USERS_FILE, JsonFileStorage};

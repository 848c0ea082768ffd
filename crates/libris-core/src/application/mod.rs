//! Application layer for Libris.
//!
//! This layer contains:
//! - **Services**: The library store (`LibraryService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::LibraryService;

// Re-export port traits (for adapter implementation)
pub use ports::{CatalogStorage, Filesystem};

pub use error::ApplicationError;

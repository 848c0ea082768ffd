//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `libris-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CatalogStorage`: Load and overwrite whole collections
//!   - `Filesystem`: Raw file access used by storage adapters
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The interactive shell in the CLI layer calls `LibraryService` directly)

pub mod output;

pub use output::{CatalogStorage, Filesystem};

#[cfg(test)]
pub use output::MockCatalogStorage;

//! Core domain layer for Libris.
//!
//! This module contains pure catalog types with no I/O. Persistence is
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or console access
//! - **Few external crates**: std + thiserror + serde derives
//! - **Plain entities**: All domain objects are Clone + PartialEq
//!
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Book, User};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{EntityId, parse_year};

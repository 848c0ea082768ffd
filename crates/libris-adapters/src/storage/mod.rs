//! Catalog storage adapters.

mod json;

pub use json::{DEFAULT_BOOKS_FILE, DEFAULT_USERS_FILE, JsonFileStorage};

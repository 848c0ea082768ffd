//! Book entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// A book in the catalog.
///
/// Field names are PascalCase on the wire (`Id`, `Title`, `Author`,
/// `YearPublished`) to stay compatible with existing `books.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub author: String,
    #[serde(default)]
    pub year_published: i32,
}

impl Book {
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        author: impl Into<String>,
        year_published: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year_published,
        }
    }
}

/// Listing line: `id: title - author (year)`.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({})",
            self.id, self.title, self.author, self.year_published
        )
    }
}

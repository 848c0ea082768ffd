//! User entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::EntityId;

/// A registered library user. Users are never linked to books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub email: String,
}

impl User {
    pub fn new(id: EntityId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Listing line: `id: name - email`.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.id, self.name, self.email)
    }
}

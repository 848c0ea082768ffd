//! Domain value objects: EntityId.
//!
//! # Design
//!
//! `EntityId` is a pure value type: `Copy`, equality-by-value, no identity of
//! its own. It serialises as a bare JSON integer so persistence files keep
//! the `"Id": 42` shape.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── EntityId ─────────────────────────────────────────────────────────────────

/// Identifier of a book or a user.
///
/// Uniqueness is not a property of the type: files written by older versions
/// may hold duplicates, and the library keeps them as-is. A record stored
/// without an `Id` loads as `0`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(i32);

impl EntityId {
    /// The id handed out for the first entity of an empty collection.
    pub const FIRST: Self = Self(1);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// One past the largest id in `existing`, or [`EntityId::FIRST`] when
    /// `existing` is empty.
    ///
    /// Ids are unique among the live records, not over all time: removing the
    /// record with the largest id frees that id for the next record.
    pub fn next_after<I>(existing: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Self>,
    {
        match existing.into_iter().max() {
            None => Ok(Self::FIRST),
            Some(Self(last)) if last < 0 => Ok(Self::FIRST),
            Some(Self(last)) => last
                .checked_add(1)
                .map(Self)
                .ok_or(DomainError::IdSpaceExhausted { last }),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId { input: s.into() })
    }
}

// ── Year ─────────────────────────────────────────────────────────────────────

/// Parse a publication year typed by the user.
///
/// Any whole number is accepted; there is no calendar range check.
pub fn parse_year(input: &str) -> Result<i32, DomainError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| DomainError::InvalidYear {
            input: input.into(),
        })
}

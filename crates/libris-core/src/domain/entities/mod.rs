pub mod book;
pub mod user;

pub use book::Book;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Read a string field that older files may store as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//! Book record type
//!
//! A plain data holder for one catalog entry. Records are created once
//! (by `add` or by deserializing a stored entry) and never mutated.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry: title, author, ISBN.
///
/// All three fields are free text. The ISBN is treated as an identifier by
/// lookups but its format is not validated and uniqueness is not enforced.
/// Identity is field equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    /// Create a new record. No validation is performed.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Convert to a key-ordered JSON mapping `{title, author, isbn}`.
    ///
    /// This is the shape persisted to the backing file, one mapping per
    /// record.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert("title".to_string(), Value::String(self.title.clone()));
        mapping.insert("author".to_string(), Value::String(self.author.clone()));
        mapping.insert("isbn".to_string(), Value::String(self.isbn.clone()));
        mapping
    }
}

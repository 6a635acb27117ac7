//! Book descriptor domain model.

use serde::{Deserialize, Serialize};

/// Title substituted when a record carries none.
pub const UNTITLED: &str = "Untitled";

/// Author substituted when a record carries none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Key synthesized for records that predate stable identifiers.
pub fn title_key(title: &str) -> String {
    format!("title:{title}")
}

/// Canonical favoritable item.
///
/// `key` is the stable, globally unique identifier of the underlying book;
/// the remaining fields are display metadata with documented fallbacks.
/// Serialized field names match the persisted record shape, so a saved list
/// of descriptors is exactly the current-schema favorites record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDescriptor {
    pub key: String,

    pub title: String,

    pub author: String,

    /// Absent covers are persisted as `null`, matching the record shape the
    /// original clients wrote.
    #[serde(rename = "coverUrl")]
    pub cover_url: Option<String>,
}

/// Partial caller-supplied descriptor for inserts.
///
/// Mirrors what a rendered context can actually provide: the key is
/// required, everything else may be missing and falls back exactly like a
/// partial persisted record does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub key: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub cover_url: Option<String>,
}

impl BookDraft {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Materialize the draft with field defaulting applied.
    pub fn into_descriptor(self) -> BookDescriptor {
        BookDescriptor {
            key: self.key,
            title: non_empty(self.title).unwrap_or_else(|| UNTITLED.to_string()),
            author: non_empty(self.author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            cover_url: non_empty(self.cover_url),
        }
    }
}

impl From<BookDescriptor> for BookDraft {
    fn from(book: BookDescriptor) -> Self {
        Self {
            key: book.key,
            title: Some(book.title),
            author: Some(book.author),
            cover_url: book.cover_url,
        }
    }
}

/// Empty strings count as absent everywhere a field can be missing.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

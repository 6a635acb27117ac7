//! Schema normalizer for the persisted favorites record.
//!
//! Two historical record shapes exist: a legacy array of plain title
//! strings, and the current array of partial descriptor objects. No version
//! tag is stored; the record is classified by the type of its first
//! element, and mixed-type records are unsupported. Normalization never
//! fails and never deduplicates; uniqueness is enforced by the store on
//! insert, not on read.

use serde_json::Value;
use tracing::debug;

use crate::book::{non_empty, title_key, BookDescriptor, UNKNOWN_AUTHOR, UNTITLED};

/// Coerce an arbitrary decoded record into the canonical favorites list.
///
/// Anything that is not an array, and every malformed element, degrades
/// silently; output order equals input order.
pub fn normalize_favorites(raw: &Value) -> Vec<BookDescriptor> {
    let items = match raw.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Vec::new(),
    };

    if items[0].is_string() {
        items.iter().filter_map(legacy_entry).collect()
    } else {
        items.iter().filter_map(current_entry).collect()
    }
}

/// Legacy schema entry: a bare title string.
fn legacy_entry(value: &Value) -> Option<BookDescriptor> {
    let Some(title) = value.as_str() else {
        debug!("dropping non-string entry in legacy favorites record");
        return None;
    };

    Some(BookDescriptor {
        key: title_key(title),
        title: title.to_string(),
        author: UNKNOWN_AUTHOR.to_string(),
        cover_url: None,
    })
}

/// Current schema entry: a partial descriptor object.
fn current_entry(value: &Value) -> Option<BookDescriptor> {
    let Some(entry) = value.as_object() else {
        debug!("dropping non-object entry in favorites record");
        return None;
    };

    let title = text_field(entry, "title");
    let key = text_field(entry, "key")
        .unwrap_or_else(|| title_key(title.as_deref().unwrap_or(UNTITLED)));

    Some(BookDescriptor {
        key,
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        author: text_field(entry, "author").unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        cover_url: text_field(entry, "coverUrl"),
    })
}

/// Non-empty string field; `""` and non-string values count as absent.
fn text_field(entry: &serde_json::Map<String, Value>, name: &str) -> Option<String> {
    non_empty(entry.get(name).and_then(Value::as_str).map(str::to_string))
}

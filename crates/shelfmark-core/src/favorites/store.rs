//! Favorites store: load/save plus membership and mutation operations.
//!
//! Every public operation is a complete read-normalize-mutate-write cycle
//! against the injected storage port. Nothing is cached between calls, so
//! any number of bound controls observe the same record. Cross-process
//! writers race last-writer-wins; see [`RecordStoragePort`].

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::book::{BookDescriptor, BookDraft};
use crate::favorites::normalize::normalize_favorites;
use crate::ports::{RecordStorageError, RecordStoragePort};

/// Default name of the persisted favorites record.
pub const DEFAULT_RECORD_NAME: &str = "favorites";

#[derive(Debug, Error)]
pub enum FavoritesStoreError {
    #[error("favorites record encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] RecordStorageError),
}

/// The single source of truth for the user's favorited books.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn RecordStoragePort>,
    record_name: String,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn RecordStoragePort>) -> Self {
        Self::with_record_name(storage, DEFAULT_RECORD_NAME)
    }

    pub fn with_record_name(
        storage: Arc<dyn RecordStoragePort>,
        record_name: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            record_name: record_name.into(),
        }
    }

    /// Load the current favorites list.
    ///
    /// Absent, unreadable, and unparsable records all degrade to an empty
    /// list. A legacy record is normalized in memory but left untouched in
    /// storage; only the next mutation writes it back in current shape.
    pub fn load(&self) -> Vec<BookDescriptor> {
        let raw = match self.storage.get(&self.record_name) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    record = %self.record_name,
                    error = %err,
                    "favorites read failed, treating record as absent"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => normalize_favorites(&value),
            Err(err) => {
                warn!(
                    record = %self.record_name,
                    error = %err,
                    "favorites record unparsable, treating record as absent"
                );
                Vec::new()
            }
        }
    }

    /// Persist the full list, replacing the stored record.
    ///
    /// Write failures propagate; read-side failures never do.
    pub fn save(&self, favorites: &[BookDescriptor]) -> Result<(), FavoritesStoreError> {
        let encoded = serde_json::to_string(favorites)?;
        self.storage.set(&self.record_name, &encoded)?;
        debug!(record = %self.record_name, count = favorites.len(), "favorites saved");
        Ok(())
    }

    /// Whether a book with this key is currently favorited.
    pub fn is_favorite(&self, key: &str) -> bool {
        self.load().iter().any(|book| book.key == key)
    }

    /// Append a favorite unless the key is already present.
    ///
    /// Returns `Ok(true)` when the list changed. A draft without a key is a
    /// silent no-op, and re-adding an existing key never updates the stored
    /// fields, even when the caller's copy differs.
    pub fn add_favorite(&self, book: impl Into<BookDraft>) -> Result<bool, FavoritesStoreError> {
        let draft = book.into();
        if draft.key.is_empty() {
            debug!("ignoring favorite draft without a key");
            return Ok(false);
        }

        let mut favorites = self.load();
        if favorites.iter().any(|book| book.key == draft.key) {
            return Ok(false);
        }

        favorites.push(draft.into_descriptor());
        self.save(&favorites)?;
        Ok(true)
    }

    /// Drop every entry with this key and rewrite the record.
    ///
    /// The rewrite happens even when nothing matched.
    pub fn remove_favorite_by_key(&self, key: &str) -> Result<(), FavoritesStoreError> {
        let favorites: Vec<BookDescriptor> = self
            .load()
            .into_iter()
            .filter(|book| book.key != key)
            .collect();
        self.save(&favorites)
    }
}

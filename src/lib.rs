//! # Shelfmark
//!
//! Persisted book favorites with synchronized toggle controls.
//!
//! Composition shell over the workspace crates: re-exports the domain,
//! application, and adapter layers and wires the default store. The
//! favorites record is the single source of truth; every bound control
//! re-reads it on activation, so independently rendered controls for the
//! same book never drift apart.

use std::sync::Arc;

pub use shelfmark_app::controls::{
    apply_favorite_visual, hydrate_toggle_controls, RemoveControl, ToggleControl,
    LABEL_FAVORITED, LABEL_NOT_FAVORITED,
};
pub use shelfmark_app::usecases::{ListFavorites, SearchBooks};
pub use shelfmark_core::book::{BookDescriptor, BookDraft};
pub use shelfmark_core::config::{SearchConfig, ShelfmarkConfig, StorageConfig};
pub use shelfmark_core::favorites::store::{FavoritesStore, FavoritesStoreError};
pub use shelfmark_core::ports;
pub use shelfmark_infra::search::OpenLibraryClient;
pub use shelfmark_infra::storage::{default_data_root, FileRecordStorage, InMemoryRecordStorage};

/// Favorites store wired to file-backed storage under the default data root.
pub fn default_favorites_store() -> FavoritesStore {
    favorites_store(&ShelfmarkConfig::default())
}

/// Favorites store wired to file-backed storage per the given configuration.
pub fn favorites_store(config: &ShelfmarkConfig) -> FavoritesStore {
    let storage = Arc::new(FileRecordStorage::new(default_data_root()));
    FavoritesStore::with_record_name(storage, config.storage.record_name.clone())
}

/// Search use case wired to the Open Library client.
pub fn book_search(config: &ShelfmarkConfig) -> SearchBooks {
    let client = Arc::new(OpenLibraryClient::with_base_url(config.search.base_url.clone()));
    SearchBooks::with_config(client, config.search.clone())
}

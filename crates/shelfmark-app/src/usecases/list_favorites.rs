//! Use case for listing the persisted favorites.

use tracing::debug;

use shelfmark_core::book::BookDescriptor;
use shelfmark_core::favorites::store::FavoritesStore;

/// Use case for retrieving the full favorites list, insertion-ordered.
///
/// This is the data source for the favorites page grid; the rendering
/// collaborator turns each descriptor into a card and wires a
/// [`RemoveControl`](crate::controls::RemoveControl) onto it.
pub struct ListFavorites {
    store: FavoritesStore,
}

impl ListFavorites {
    pub fn new(store: FavoritesStore) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub fn execute(&self) -> Vec<BookDescriptor> {
        let favorites = self.store.load();
        debug!(count = favorites.len(), "favorites listed");
        favorites
    }
}

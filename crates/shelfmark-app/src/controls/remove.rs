use std::sync::Arc;

use tracing::debug;

use shelfmark_core::favorites::store::{FavoritesStore, FavoritesStoreError};
use shelfmark_core::ports::RenderedControlPort;

/// One-way remove control for controls that represent an existing favorite.
///
/// Activation deletes the favorite and drops the rendered element instead
/// of toggling; there is no way back for the control itself. The removal is
/// unconditional: the record is rewritten even if the key was already gone.
pub struct RemoveControl {
    key: String,
    store: FavoritesStore,
    control: Arc<dyn RenderedControlPort>,
}

impl RemoveControl {
    /// Bind a control. Returns `None` when the rendered context exposes no
    /// descriptor.
    pub fn bind(store: FavoritesStore, control: Arc<dyn RenderedControlPort>) -> Option<Self> {
        let book = control.descriptor()?;
        Some(Self {
            key: book.key,
            store,
            control,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Remove the bound favorite and detach the rendered element.
    pub fn activate(&self) -> Result<(), FavoritesStoreError> {
        self.store.remove_favorite_by_key(&self.key)?;
        self.control.detach();
        debug!(key = %self.key, "favorite removed, control detached");
        Ok(())
    }
}

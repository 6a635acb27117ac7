use std::sync::Arc;

use tracing::debug;

use shelfmark_core::book::BookDescriptor;
use shelfmark_core::favorites::store::{FavoritesStore, FavoritesStoreError};
use shelfmark_core::ports::RenderedControlPort;

use super::apply_favorite_visual;

/// Two-way favorite toggle bound to one rendered control.
///
/// The store is re-queried on every activation; the control never trusts
/// the state it painted last, so independently bound instances of the same
/// book stay observably consistent.
pub struct ToggleControl {
    book: BookDescriptor,
    store: FavoritesStore,
    control: Arc<dyn RenderedControlPort>,
}

impl ToggleControl {
    /// Bind a control, painting its initial state from the store.
    ///
    /// Returns `None` when the rendered context exposes no descriptor.
    pub fn bind(store: FavoritesStore, control: Arc<dyn RenderedControlPort>) -> Option<Self> {
        let book = control.descriptor()?;
        apply_favorite_visual(control.as_ref(), store.is_favorite(&book.key));
        Some(Self {
            book,
            store,
            control,
        })
    }

    pub fn book(&self) -> &BookDescriptor {
        &self.book
    }

    /// Handle one activation: flip membership and repaint.
    ///
    /// Returns the membership state after the flip.
    pub fn activate(&self) -> Result<bool, FavoritesStoreError> {
        if self.store.is_favorite(&self.book.key) {
            self.store.remove_favorite_by_key(&self.book.key)?;
            apply_favorite_visual(self.control.as_ref(), false);
            debug!(key = %self.book.key, "favorite removed via toggle");
            Ok(false)
        } else {
            self.store.add_favorite(self.book.clone())?;
            apply_favorite_visual(self.control.as_ref(), true);
            debug!(key = %self.book.key, "favorite added via toggle");
            Ok(true)
        }
    }
}

/// Bind every control whose rendered context exposes a descriptor.
///
/// Controls without one are skipped, matching the collaborator contract:
/// no key, no binding.
pub fn hydrate_toggle_controls(
    store: &FavoritesStore,
    controls: impl IntoIterator<Item = Arc<dyn RenderedControlPort>>,
) -> Vec<ToggleControl> {
    controls
        .into_iter()
        .filter_map(|control| ToggleControl::bind(store.clone(), control))
        .collect()
}

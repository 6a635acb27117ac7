//! Favorites domain: the persisted list and its normalization rules.

pub mod normalize;
pub mod store;

pub use normalize::normalize_favorites;
pub use store::{FavoritesStore, FavoritesStoreError, DEFAULT_RECORD_NAME};

//! Shelfmark application layer.
//!
//! Use cases plus the control synchronization protocol that keeps rendered
//! favorite controls consistent with the favorites store.

pub mod controls;
pub mod usecases;

pub use controls::{
    apply_favorite_visual, hydrate_toggle_controls, RemoveControl, ToggleControl,
    LABEL_FAVORITED, LABEL_NOT_FAVORITED,
};
pub use usecases::{ListFavorites, SearchBooks};

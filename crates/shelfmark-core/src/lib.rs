//! # shelfmark-core
//!
//! Core domain models and business logic for Shelfmark.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the book descriptor model, the schema normalizer for the
//! persisted favorites record, the favorites store, and the port traits
//! implemented by the outer layers.

// Public module exports
pub mod book;
pub mod config;
pub mod favorites;
pub mod ports;

// Re-export commonly used types at the crate root
pub use book::{BookDescriptor, BookDraft};
pub use config::{SearchConfig, ShelfmarkConfig, StorageConfig};
pub use favorites::normalize::normalize_favorites;
pub use favorites::store::{FavoritesStore, FavoritesStoreError, DEFAULT_RECORD_NAME};

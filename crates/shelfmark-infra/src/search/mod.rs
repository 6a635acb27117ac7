//! Remote book metadata adapters.

pub mod open_library;

pub use open_library::OpenLibraryClient;

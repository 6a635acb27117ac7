//! Record storage adapters.

pub mod file;
pub mod memory;

pub use file::{default_data_root, FileRecordStorage};
pub use memory::InMemoryRecordStorage;

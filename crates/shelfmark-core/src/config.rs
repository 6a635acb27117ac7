//! Application configuration domain model.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Plain in-process configuration with defaults; there is no config-file
/// layer behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShelfmarkConfig {
    /// Storage settings
    pub storage: StorageConfig,

    /// Remote search settings
    pub search: SearchConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Name of the persisted favorites record.
    pub record_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            record_name: "favorites".to_string(),
        }
    }
}

/// Remote search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the book metadata source.
    pub base_url: String,

    /// Query used to fill the home grid before the user searches.
    pub initial_query: String,

    /// Result count requested for the initial grid.
    pub initial_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            initial_query: "fantasy".to_string(),
            initial_limit: 24,
        }
    }
}

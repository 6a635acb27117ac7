//! Remote book metadata port.
//!
//! The favorites core only consumes records already shaped as
//! [`BookDescriptor`]s; fetching and mapping them is adapter territory.

use async_trait::async_trait;
use thiserror::Error;

use crate::book::BookDescriptor;

#[derive(Debug, Error)]
pub enum BookSearchError {
    #[error("search request failed: {0}")]
    Transport(String),

    #[error("search backend returned status {0}")]
    Status(u16),

    #[error("search response decode failed: {0}")]
    Decode(String),
}

/// Paginated lookup parameters. Blank terms are ignored by adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-form query term.
    pub query: Option<String>,

    /// Title-restricted query term.
    pub title: Option<String>,

    pub limit: u32,

    /// 1-based page index.
    pub page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: None,
            title: None,
            limit: 20,
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }
}

/// One search result: the favoritable descriptor plus metadata that never
/// enters the favorites record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub book: BookDescriptor,
    pub first_publish_year: Option<u32>,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub hits: Vec<SearchHit>,
    pub total: u64,
    pub page: u32,
}

#[async_trait]
pub trait BookSearchPort: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, BookSearchError>;
}

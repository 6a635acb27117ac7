//! Use case for querying the remote book metadata source.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use shelfmark_core::config::SearchConfig;
use shelfmark_core::ports::{BookSearchPort, SearchPage, SearchQuery};

/// Use case for paginated book search.
///
/// ## Behavior
/// - Forwards the query to the search port
/// - Returns one page of hits already shaped as book descriptors
pub struct SearchBooks {
    search: Arc<dyn BookSearchPort>,
    config: SearchConfig,
}

impl SearchBooks {
    pub fn new(search: Arc<dyn BookSearchPort>) -> Self {
        Self::with_config(search, SearchConfig::default())
    }

    pub fn with_config(search: Arc<dyn BookSearchPort>, config: SearchConfig) -> Self {
        Self { search, config }
    }

    /// Execute a user-driven search.
    pub async fn execute(&self, query: SearchQuery) -> Result<SearchPage> {
        let span = info_span!("usecase.search_books.execute");

        async {
            let page = self.search.search(&query).await?;

            info!(
                hits = page.hits.len(),
                total = page.total,
                page = page.page,
                "book search completed"
            );
            Ok(page)
        }
        .instrument(span)
        .await
    }

    /// Fill the initial grid with the configured discovery query.
    pub async fn initial(&self) -> Result<SearchPage> {
        let query = SearchQuery {
            query: Some(self.config.initial_query.clone()),
            limit: self.config.initial_limit,
            ..SearchQuery::default()
        };
        self.execute(query).await
    }
}

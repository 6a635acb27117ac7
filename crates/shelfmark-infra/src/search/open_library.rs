//! Open Library search client.
//!
//! Adapter over `GET {base}/search.json`; see
//! <https://openlibrary.org/dev/docs/api/search>. Docs are mapped onto
//! search hits with the same field defaulting the favorites record uses, so
//! results can be favorited as-is.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use shelfmark_core::book::{BookDescriptor, UNKNOWN_AUTHOR, UNTITLED};
use shelfmark_core::ports::{BookSearchError, BookSearchPort, SearchHit, SearchPage, SearchQuery};

const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
const COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

pub struct OpenLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,

    #[serde(rename = "numFound")]
    num_found: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    key: Option<String>,
    title: Option<String>,
    author_name: Option<Vec<String>>,
    first_publish_year: Option<u32>,
    cover_i: Option<u64>,
}

impl SearchDoc {
    fn into_hit(self) -> SearchHit {
        let author = self
            .author_name
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        SearchHit {
            book: BookDescriptor {
                // Docs without a key yield an empty one, which the store
                // refuses to favorite.
                key: self.key.unwrap_or_default(),
                title: self
                    .title
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| UNTITLED.to_string()),
                author,
                cover_url: self
                    .cover_i
                    .map(|id| format!("{COVERS_BASE_URL}/b/id/{id}-L.jpg")),
            },
            first_publish_year: self.first_publish_year,
        }
    }
}

/// Trimmed query term, dropped entirely when blank.
fn term(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl BookSearchPort for OpenLibraryClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchPage, BookSearchError> {
        let url = format!("{}/search.json", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(q) = term(&query.query) {
            params.push(("q", q));
        }
        if let Some(title) = term(&query.title) {
            params.push(("title", title));
        }
        params.push(("limit", query.limit.to_string()));
        params.push(("page", query.page.to_string()));

        let response = self
            .http
            .get(&url)
            .query(&params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| BookSearchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BookSearchError::Status(status.as_u16()));
        }

        let decoded: SearchResponse = response
            .json()
            .await
            .map_err(|err| BookSearchError::Decode(err.to_string()))?;

        let hits: Vec<SearchHit> = decoded.docs.into_iter().map(SearchDoc::into_hit).collect();
        let total = decoded.num_found.unwrap_or(hits.len() as u64);
        debug!(hits = hits.len(), total, "open library search decoded");

        Ok(SearchPage {
            hits,
            total,
            page: query.page,
        })
    }
}

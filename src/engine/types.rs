//! Engine types
//!
//! Page source abstraction, walk configuration and statistics.

use crate::error::Result;
use crate::http::HttpClient;
use crate::page::Page;
use crate::pagination::PaginationParameters;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Something that returns one page of a collection for a parameter set
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetch the page selected by `params`
    async fn fetch(&self, params: &PaginationParameters) -> Result<Page<T>>;
}

/// A collection endpoint served over HTTP
#[derive(Debug)]
pub struct HttpPageSource<'a> {
    client: &'a HttpClient,
    path: String,
}

impl<'a> HttpPageSource<'a> {
    /// Bind a client to a collection path
    pub fn new(client: &'a HttpClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Collection path or URL
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl<T> PageSource<T> for HttpPageSource<'_>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn fetch(&self, params: &PaginationParameters) -> Result<Page<T>> {
        self.client.get_page(&self.path, params).await
    }
}

/// Configuration for a page walk
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Stop after this many pages (None = until the last page)
    pub max_pages: Option<u32>,
}

impl WalkConfig {
    /// Create a new walk config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max pages
    #[must_use]
    pub fn with_max_pages(mut self, max: u32) -> Self {
        self.max_pages = Some(max);
        self
    }
}

/// Statistics from a page walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Total pages fetched
    pub pages_fetched: u32,
    /// Time spent fetching, in milliseconds
    pub duration_ms: u64,
}

impl WalkStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Add fetch time
    pub fn add_duration(&mut self, ms: u64) {
        self.duration_ms += ms;
    }
}

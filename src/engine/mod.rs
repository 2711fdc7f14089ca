//! Execution engine module
//!
//! Sequential page walking.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PageSource` - Fetches one page for a parameter set
//! - `PageWalker` - Follows `next` links one page at a time
//! - `WalkConfig` / `WalkStats` - Limits and counters for a walk

mod types;

pub use types::{HttpPageSource, PageSource, WalkConfig, WalkStats};

use crate::error::Result;
use crate::page::Page;
use crate::pagination::{CursorPager, NextPage};
use futures::stream::{self, Stream};
use std::time::Instant;
use tracing::{debug, info};

/// Walks a paged collection from its first requested page to its last
///
/// Pages are fetched strictly one after another; each request is built from
/// the `next` link of the previous page.
pub struct PageWalker<S> {
    /// Page source
    source: S,
    /// Cursor state
    pager: CursorPager,
    /// Walk configuration
    config: WalkConfig,
    /// Statistics
    stats: WalkStats,
}

impl<S> PageWalker<S> {
    /// Create a new page walker
    pub fn new(source: S, pager: CursorPager) -> Self {
        Self {
            source,
            pager,
            config: WalkConfig::default(),
            stats: WalkStats::default(),
        }
    }

    /// Set walk configuration
    #[must_use]
    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// Get statistics
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Get the pager
    pub fn pager(&self) -> &CursorPager {
        &self.pager
    }

    fn limit_reached(&self) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| self.stats.pages_fetched >= max)
    }

    /// Fetch the next page, or `None` once the walk is over
    pub async fn next_page<T>(&mut self) -> Result<Option<Page<T>>>
    where
        S: PageSource<T>,
    {
        if self.pager.is_done() {
            return Ok(None);
        }
        if self.limit_reached() {
            debug!("Page limit of {:?} reached", self.config.max_pages);
            return Ok(None);
        }

        let params = self.pager.current_params()?;
        let start = Instant::now();
        let page = self.source.fetch(&params).await?;
        self.stats.add_page();
        self.stats.add_duration(start.elapsed().as_millis() as u64);

        match self.pager.process_links(&page.links)? {
            NextPage::Continue { cursor, .. } => {
                debug!("Page {}: next cursor {cursor}", self.stats.pages_fetched);
            }
            NextPage::Done => {
                info!(
                    "Completed walk: {} pages in {}ms",
                    self.stats.pages_fetched, self.stats.duration_ms
                );
            }
        }

        Ok(Some(page))
    }

    /// Fetch every remaining page
    pub async fn collect<T>(mut self) -> Result<Vec<Page<T>>>
    where
        S: PageSource<T>,
    {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await? {
            pages.push(page);
        }
        Ok(pages)
    }

    /// Turn the walker into a stream of pages
    pub fn into_stream<T>(self) -> impl Stream<Item = Result<Page<T>>>
    where
        S: PageSource<T>,
    {
        stream::try_unfold(self, |mut walker| async move {
            let page = walker.next_page().await?;
            Ok(page.map(|page| (page, walker)))
        })
    }
}

//! Cursor pager
//!
//! Follows `next` links page after page, turning each one into the
//! parameters of the following request.

use super::builder::build_paging_parameters;
use super::next_url::NextPageUrl;
use super::types::{Filter, NextPage, PageCriteria, PaginationParameters, PaginationState};
use crate::error::Result;
use crate::links::{find_next_page_link, Link};

/// Cursor pagination driven by hypermedia `next` links
///
/// The page size and filters of the initial criteria are re-applied to every
/// follow-up request; only the cursor changes.
#[derive(Debug, Clone)]
pub struct CursorPager {
    criteria: PageCriteria,
    filters: Vec<Filter>,
    state: PaginationState,
}

impl CursorPager {
    /// Create a pager, rejecting criteria that could never be sent
    pub fn new(criteria: PageCriteria, filters: Vec<Filter>) -> Result<Self> {
        build_paging_parameters(&criteria, &filters)?;

        let state = PaginationState {
            cursor: criteria.cursor.clone(),
            ..PaginationState::default()
        };

        Ok(Self {
            criteria,
            filters,
            state,
        })
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Check if the last processed page had no successor
    pub fn is_done(&self) -> bool {
        self.state.done
    }

    /// Parameters for the request the pager is positioned at
    pub fn current_params(&self) -> Result<PaginationParameters> {
        let criteria = PageCriteria {
            cursor: self.state.cursor.clone(),
            page_size: self.criteria.page_size,
        };
        build_paging_parameters(&criteria, &self.filters)
    }

    /// Process the links of a fetched page
    ///
    /// A missing `next` link, or one with an empty cursor, ends pagination.
    /// So does a `next` link repeating the cursor of the page just fetched.
    /// A malformed `next` link ends pagination and returns the parse error.
    pub fn process_links(&mut self, links: &[Link]) -> Result<NextPage> {
        self.state.next_page();

        let Some(link) = find_next_page_link(Some(links)) else {
            self.state.mark_done();
            return Ok(NextPage::Done);
        };

        let next = match NextPageUrl::parse(link.href()) {
            Ok(next) => next,
            Err(e) => {
                self.state.mark_done();
                return Err(e);
            }
        };

        if next.cursor().is_empty() || self.state.cursor.as_deref() == Some(next.cursor()) {
            self.state.mark_done();
            return Ok(NextPage::Done);
        }

        let criteria = next.to_page_criteria(self.criteria.page_size);
        let params = build_paging_parameters(&criteria, &self.filters)?;
        let cursor = next.into_cursor();
        self.state.set_cursor(cursor.clone());

        Ok(NextPage::Continue { cursor, params })
    }
}

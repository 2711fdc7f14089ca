//! Pagination module
//!
//! Cursor pagination for HATEOAS collections.
//!
//! # Overview
//!
//! A caller fetches a page, looks up its `next` link, parses that link into
//! a cursor and builds the query parameters of the following request:
//!
//! - `build_paging_parameters` - Page criteria and filters to query parameters
//! - `NextPageUrl` - Validated `next` link with its extracted cursor
//! - `CursorPager` - Runs the cycle above page after page

mod builder;
mod next_url;
mod pager;
mod types;

pub use builder::{build_paging_parameters, EXPAND_TOKEN};
pub use next_url::{parse_next_page_url, NextPageUrl};
pub use pager::CursorPager;
pub use types::{
    Filter, NextPage, PageCriteria, PaginationParameters, PaginationParametersBuilder,
    PaginationState, ParamName,
};

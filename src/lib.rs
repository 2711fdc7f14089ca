// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # hateoas-paging
//!
//! Client-side cursor pagination for HATEOAS REST APIs.
//!
//! Collection responses carry a list of typed links. The link with relation
//! `next` points at the following page and carries an opaque `cursor` query
//! parameter. This crate finds that link, extracts the cursor, and builds the
//! query parameters for the next request.
//!
//! ## Features
//!
//! - **Link lookup**: First link with a given relation, `Link` header parsing
//! - **Paging parameters**: `cursor`, `pageSize`, `since` and `expand`
//! - **Next-page URLs**: Cursor extraction from absolute `next` links
//! - **Page walking**: Sequential fetching over HTTP with a page limit
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hateoas_paging::{build_paging_parameters, Page, PageCriteria, Result};
//!
//! fn next_request(page: &Page<serde_json::Value>) -> Result<Option<String>> {
//!     let Some(next) = page.next_page_url()? else {
//!         return Ok(None);
//!     };
//!     let criteria = next.to_page_criteria(Some(50));
//!     Ok(Some(build_paging_parameters(&criteria, &[])?.to_query_string()))
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                PageWalker (engine)                          │
//! │  fetch(params) → Page<T>  →  process_links → NextPage       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────┬────────────────┴───────┬───────────┬────────────┐
//! │   Links   │   Pagination           │   HTTP    │   Auth     │
//! ├───────────┼────────────────────────┼───────────┼────────────┤
//! │ Link      │ build_paging_parameters│ GET       │ API Key    │
//! │ Relation  │ NextPageUrl            │ Timeouts  │ Basic      │
//! │ Lookup    │ CursorPager            │ Headers   │ Bearer     │
//! └───────────┴────────────────────────┴───────────┴────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Link model, relation catalog and link lookup
pub mod links;

/// Paging parameters, next-page URLs and cursor state
pub mod pagination;

/// Collection page envelope
pub mod page;

/// Authentication implementations
pub mod auth;

/// HTTP client
pub mod http;

/// Sequential page walking
pub mod engine;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, ClientConfig};
pub use links::{find_link_with_type, find_next_page_link, Link, Relation};
pub use page::Page;
pub use pagination::{
    build_paging_parameters, parse_next_page_url, Filter, NextPageUrl, PageCriteria,
    PaginationParameters,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

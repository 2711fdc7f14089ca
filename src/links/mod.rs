//! Hypermedia links module
//!
//! # Overview
//!
//! The links module provides:
//! - `Link` - An immutable `href` + `rel` pair from a resource representation
//! - `Relation` - The closed catalog of relation names the API defines
//! - Lookup of the first link with a given relation, e.g. the `next` page
//! - Parsing of RFC 8288 `Link` headers into links

mod lookup;
mod types;

pub use lookup::{find_link_with_type, find_next_page_link, parse_link_header};
pub use types::{Link, Relation};

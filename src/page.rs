//! Resource pages
//!
//! A page is a resource representation carrying its hypermedia links next
//! to the resource payload:
//!
//! ```json
//! {
//!   "links": [{ "href": "https://api.example.com/webcasts?cursor=2", "rel": "next" }],
//!   "webcasts": [ ... ]
//! }
//! ```

use crate::error::Result;
use crate::links::{find_link_with_type, find_next_page_link, Link};
use crate::pagination::NextPageUrl;
use serde::{Deserialize, Serialize};

/// One fetched page of a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Links of the page, in document order
    #[serde(default)]
    pub links: Vec<Link>,

    /// Everything besides the links
    #[serde(flatten)]
    pub resource: T,
}

impl<T> Page<T> {
    /// Create a page from its parts
    pub fn new(links: Vec<Link>, resource: T) -> Self {
        Self { links, resource }
    }

    /// First link with the given relation
    pub fn link(&self, relation: impl AsRef<str>) -> Result<Option<&Link>> {
        find_link_with_type(Some(self.links.as_slice()), relation)
    }

    /// The `next` link, if any
    pub fn next_link(&self) -> Option<&Link> {
        find_next_page_link(Some(self.links.as_slice()))
    }

    /// Parse the `next` link, if any
    pub fn next_page_url(&self) -> Result<Option<NextPageUrl>> {
        self.next_link().map(NextPageUrl::try_from).transpose()
    }

    /// Check if a `next` link exists
    pub fn has_next(&self) -> bool {
        self.next_link().is_some()
    }
}

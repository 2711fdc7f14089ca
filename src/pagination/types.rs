//! Pagination types
//!
//! Defines the paging intent a caller supplies and the ordered parameter
//! mapping handed to the HTTP layer.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use url::form_urlencoded;
use url::Url;

// ============================================================================
// Parameter Names
// ============================================================================

/// Query parameter names the server understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    /// Opaque cursor of the page to fetch
    Cursor,
    /// Requested number of items per page
    PageSize,
    /// Lower bound on modification time
    Since,
    /// Embed related resources in the response
    Expand,
}

impl ParamName {
    /// Wire name of the parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamName::Cursor => "cursor",
            ParamName::PageSize => "pageSize",
            ParamName::Since => "since",
            ParamName::Expand => "expand",
        }
    }
}

impl AsRef<str> for ParamName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for ParamName {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// ============================================================================
// Page Criteria
// ============================================================================

/// Paging intent supplied by the caller
///
/// A `None` field leaves the choice to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCriteria {
    /// Cursor returned by a previous page
    #[serde(default)]
    pub cursor: Option<String>,
    /// Requested page size, must be positive
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageCriteria {
    /// Criteria using server defaults for everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Additional filter applied on top of the page criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Only resources changed at or after this instant
    Since(DateTime<Utc>),
    /// Ask the server to expand embedded resources; omitted when false
    Expand(bool),
}

// ============================================================================
// Pagination Parameters
// ============================================================================

/// Ordered mapping from parameter name to its ordered values
///
/// Names keep the order in which they were first added and every name keeps
/// its values in insertion order. Instances are read-only; they are created
/// through [`PaginationParametersBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParameters {
    entries: Vec<(String, Vec<String>)>,
}

impl PaginationParameters {
    /// Start building a parameter set
    pub fn builder() -> PaginationParametersBuilder {
        PaginationParametersBuilder::default()
    }

    /// All values for a name
    pub fn get(&self, name: impl AsRef<str>) -> Option<&[String]> {
        let name = name.as_ref();
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    /// First value for a name
    pub fn first(&self, name: impl AsRef<str>) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Check whether a name is present
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no parameter was added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Name and values pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Flattened `name=value` pairs, one per value
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Encode as an `application/x-www-form-urlencoded` query string
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }

    /// Append the parameters to a URL's query
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.query_pairs());
    }
}

impl Serialize for PaginationParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for pair in self.query_pairs() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

impl Display for PaginationParameters {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_query_string())
    }
}

/// Write-once builder for [`PaginationParameters`]
#[derive(Debug, Default)]
pub struct PaginationParametersBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl PaginationParametersBuilder {
    /// Add a value, appending to the existing values of the name
    pub fn add(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> &mut Self {
        let name = name.as_ref();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name.to_string(), vec![value])),
        }
        self
    }

    /// Freeze the parameters
    pub fn build(self) -> PaginationParameters {
        PaginationParameters {
            entries: self.entries,
        }
    }
}

// ============================================================================
// Pager State
// ============================================================================

/// Result of processing a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Another page exists
    Continue {
        /// Cursor taken from the `next` link
        cursor: String,
        /// Parameters for the next request
        params: PaginationParameters,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination progress across fetched pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Pages processed so far
    pub pages: u32,
    /// Cursor of the next page to request
    pub cursor: Option<String>,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Count a processed page
    pub fn next_page(&mut self) {
        self.pages += 1;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}

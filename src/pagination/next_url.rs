//! Next-page URL parsing

use super::types::{PageCriteria, ParamName};
use crate::error::{Error, Result};
use crate::links::Link;
use std::fmt::{self, Display};
use std::str::FromStr;
use url::Url;

/// A validated `next` link carrying a pagination cursor
///
/// Only [`NextPageUrl::parse`] creates values, so every instance has an
/// http(s) URL and a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPageUrl {
    url: Url,
    cursor: String,
}

impl NextPageUrl {
    /// Validate a next-page URL and extract its cursor
    ///
    /// The `cursor` query parameter may sit anywhere in the query and is
    /// percent-decoded.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)
            .map_err(|e| Error::invalid_argument(format!("invalid URL format '{input}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_argument(format!(
                "not an HTTP(S) URL: '{input}'"
            )));
        }

        let cursor = url
            .query_pairs()
            .find(|(name, _)| name == ParamName::Cursor.as_str())
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "missing mandatory cursor parameter in '{input}'"
                ))
            })?;

        Ok(Self { url, cursor })
    }

    /// The extracted cursor
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Consume and return the cursor
    pub fn into_cursor(self) -> String {
        self.cursor
    }

    /// The parsed source URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Criteria for requesting the page this URL points at
    pub fn to_page_criteria(&self, page_size: Option<i64>) -> PageCriteria {
        PageCriteria {
            cursor: Some(self.cursor.clone()),
            page_size,
        }
    }
}

/// Parse a next-page URL, see [`NextPageUrl::parse`]
pub fn parse_next_page_url(input: &str) -> Result<NextPageUrl> {
    NextPageUrl::parse(input)
}

impl FromStr for NextPageUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&Link> for NextPageUrl {
    type Error = Error;

    fn try_from(link: &Link) -> Result<Self> {
        Self::parse(link.href())
    }
}

impl Display for NextPageUrl {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.url)
    }
}

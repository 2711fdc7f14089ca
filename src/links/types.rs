//! Link and relation types
//!
//! Defines the hypermedia link value and the closed catalog of relation
//! identifiers the API uses.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use url::Url;

// ============================================================================
// Relation Catalog
// ============================================================================

/// Relation identifiers recognized by the API
///
/// Incoming links may carry relations outside this set. Those are kept as
/// plain strings on [`Link`] and simply never match a catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Next page of a collection
    Next,
    /// Previous page of a collection
    Previous,
    /// First page of a collection
    First,
    /// Last page of a collection
    Last,
    /// The resource itself
    #[serde(rename = "self")]
    SelfLink,
    Alternate,
    Related,
    Enclosure,
    Preview,
    Thumbnail,
    Channel,
    Channels,
    ChannelSubscribers,
    Webcast,
    Webcasts,
    Survey,
    Surveys,
}

impl Relation {
    /// Every relation in the catalog
    pub const ALL: [Relation; 17] = [
        Relation::Next,
        Relation::Previous,
        Relation::First,
        Relation::Last,
        Relation::SelfLink,
        Relation::Alternate,
        Relation::Related,
        Relation::Enclosure,
        Relation::Preview,
        Relation::Thumbnail,
        Relation::Channel,
        Relation::Channels,
        Relation::ChannelSubscribers,
        Relation::Webcast,
        Relation::Webcasts,
        Relation::Survey,
        Relation::Surveys,
    ];

    /// Canonical name as it appears in a link's `rel` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Next => "next",
            Relation::Previous => "previous",
            Relation::First => "first",
            Relation::Last => "last",
            Relation::SelfLink => "self",
            Relation::Alternate => "alternate",
            Relation::Related => "related",
            Relation::Enclosure => "enclosure",
            Relation::Preview => "preview",
            Relation::Thumbnail => "thumbnail",
            Relation::Channel => "channel",
            Relation::Channels => "channels",
            Relation::ChannelSubscribers => "channel_subscribers",
            Relation::Webcast => "webcast",
            Relation::Webcasts => "webcasts",
            Relation::Survey => "survey",
            Relation::Surveys => "surveys",
        }
    }
}

impl AsRef<str> for Relation {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Relation {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Relation::ALL
            .iter()
            .copied()
            .find(|relation| relation.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown link relation '{s}'")))
    }
}

// ============================================================================
// Link
// ============================================================================

/// One hypermedia link of a resource representation
///
/// The `href` is always a non-empty absolute URL; construction and
/// deserialization both reject anything else. The `rel` is kept verbatim so
/// unrecognized relations survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLink")]
pub struct Link {
    href: String,
    rel: String,
}

/// Unvalidated wire shape of a link
#[derive(Deserialize)]
struct RawLink {
    href: String,
    rel: String,
}

impl TryFrom<RawLink> for Link {
    type Error = Error;

    fn try_from(raw: RawLink) -> Result<Self> {
        Link::new(raw.href, raw.rel)
    }
}

impl Link {
    /// Create a link, validating that `href` is an absolute URL
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Result<Self> {
        let href = href.into();
        if href.trim().is_empty() {
            return Err(Error::invalid_argument("link href must not be empty"));
        }
        Url::parse(&href).map_err(|e| {
            Error::invalid_argument(format!("link href '{href}' is not an absolute URL: {e}"))
        })?;

        Ok(Self {
            href,
            rel: rel.into(),
        })
    }

    /// Link target
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Raw relation name
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// Catalog relation, if the rel is one the API defines
    pub fn relation(&self) -> Option<Relation> {
        self.rel.parse().ok()
    }

    /// Check whether this link carries the given relation name
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel == rel
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}>; rel=\"{}\"", self.href, self.rel)
    }
}

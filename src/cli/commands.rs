//! CLI commands and argument parsing

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cursor pagination helper for HATEOAS APIs
#[derive(Parser, Debug)]
#[command(name = "hateoas-paging")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the query string for a page request
    Params {
        /// Cursor of the page to request
        #[arg(long)]
        cursor: Option<String>,

        /// Requested page size
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,

        /// Only resources changed since this RFC 3339 timestamp
        #[arg(long)]
        since: Option<DateTime<Utc>>,

        /// Expand embedded resources
        #[arg(long)]
        expand: bool,
    },

    /// Extract the cursor from a next-page URL
    NextCursor {
        /// The next-page URL
        url: String,
    },

    /// Find the first link with a relation in a JSON link list
    FindLink {
        /// Relation name (e.g. next, self, channel_subscribers)
        #[arg(long)]
        rel: String,

        /// Inline JSON array of {"href", "rel"} objects
        #[arg(long, conflicts_with = "links_file")]
        links: Option<String>,

        /// File holding the JSON link array
        #[arg(long)]
        links_file: Option<PathBuf>,
    },

    /// Walk a collection page by page and print every page
    Walk {
        /// Collection path relative to the base URL, or an absolute URL
        path: String,

        /// Cursor to start from
        #[arg(long)]
        cursor: Option<String>,

        /// Page size (overrides the config file)
        #[arg(long, allow_negative_numbers = true)]
        page_size: Option<i64>,

        /// Maximum pages to fetch (overrides the config file)
        #[arg(long)]
        max_pages: Option<u32>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

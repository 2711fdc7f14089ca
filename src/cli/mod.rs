//! CLI module
//!
//! Command-line interface for the paging helpers.
//!
//! # Commands
//!
//! - `params` - Print the query string for a page request
//! - `next-cursor` - Extract the cursor from a next-page URL
//! - `find-link` - Find the first link with a relation
//! - `walk` - Fetch a collection page by page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

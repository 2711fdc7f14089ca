//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::load_config;
use crate::engine::{HttpPageSource, PageWalker};
use crate::error::{Error, Result, ResultExt};
use crate::links::{find_link_with_type, Link};
use crate::pagination::{build_paging_parameters, CursorPager, Filter, NextPageUrl, PageCriteria};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Params {
                cursor,
                page_size,
                since,
                expand,
            } => {
                println!("{}", render_params(cursor.clone(), *page_size, *since, *expand)?);
                Ok(())
            }
            Commands::NextCursor { url } => {
                println!("{}", NextPageUrl::parse(url)?.cursor());
                Ok(())
            }
            Commands::FindLink {
                rel,
                links,
                links_file,
            } => {
                let json = match (links, links_file) {
                    (Some(inline), _) => inline.clone(),
                    (None, Some(path)) => read_file(path)?,
                    (None, None) => {
                        return Err(Error::config("Provide --links or --links-file"));
                    }
                };
                if let Some(link) = find_link(&json, rel)? {
                    self.emit(&link)?;
                }
                Ok(())
            }
            Commands::Walk {
                path,
                cursor,
                page_size,
                max_pages,
            } => self.walk(path, cursor.clone(), *page_size, *max_pages).await,
        }
    }

    /// Walk a collection and print every page
    async fn walk(
        &self,
        path: &str,
        cursor: Option<String>,
        page_size: Option<i64>,
        max_pages: Option<u32>,
    ) -> Result<()> {
        let config_path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Client config file not specified (use -C flag)"))?;
        let config = load_config(config_path)?;
        let client = config.build_client()?;

        let mut criteria = config.page_criteria();
        criteria.cursor = cursor;
        if page_size.is_some() {
            criteria.page_size = page_size;
        }

        let mut walk_config = config.walk_config();
        if max_pages.is_some() {
            walk_config.max_pages = max_pages;
        }

        info!("Walking {path} from {}", config.base_url);
        let pager = CursorPager::new(criteria, vec![])?;
        let mut walker = PageWalker::new(HttpPageSource::new(&client, path), pager)
            .with_config(walk_config);

        while let Some(page) = walker.next_page::<Value>().await? {
            self.emit(&page)?;
        }

        info!("Fetched {} pages", walker.stats().pages_fetched);
        Ok(())
    }

    /// Print a value in the selected output format
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Query string for a page request
pub(crate) fn render_params(
    cursor: Option<String>,
    page_size: Option<i64>,
    since: Option<DateTime<Utc>>,
    expand: bool,
) -> Result<String> {
    let criteria = PageCriteria { cursor, page_size };
    let mut filters = Vec::new();
    if let Some(since) = since {
        filters.push(Filter::Since(since));
    }
    filters.push(Filter::Expand(expand));

    Ok(build_paging_parameters(&criteria, &filters)?.to_query_string())
}

/// Link as written on the command line, before href validation
#[derive(Deserialize)]
struct LinkArg {
    href: String,
    rel: String,
}

/// First link with `rel` in a JSON link array
///
/// Malformed JSON is reported with context; a link with a bad href keeps
/// its `InvalidArgument` error.
pub(crate) fn find_link(json: &str, rel: &str) -> Result<Option<Link>> {
    let args: Vec<LinkArg> = serde_json::from_str(json).context("Invalid link list")?;
    let links = args
        .into_iter()
        .map(|arg| Link::new(arg.href, arg.rel))
        .collect::<Result<Vec<_>>>()?;
    Ok(find_link_with_type(Some(links.as_slice()), rel)?.cloned())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_params() {
        let since = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let query = render_params(Some("c1".to_string()), Some(10), Some(since), true).unwrap();
        assert_eq!(
            query,
            "cursor=c1&pageSize=10&since=2024-01-02T03%3A04%3A05Z&expand=true"
        );
    }

    #[test]
    fn test_render_params_defaults() {
        assert_eq!(render_params(None, None, None, false).unwrap(), "");
    }

    #[test]
    fn test_render_params_rejects_zero_page_size() {
        let err = render_params(None, Some(0), None, false).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_find_link() {
        let json = r#"[
            {"href": "https://api.example.com/surveys", "rel": "surveys"},
            {"href": "https://api.example.com/subscribers", "rel": "channel_subscribers"}
        ]"#;

        let link = find_link(json, "channel_subscribers").unwrap().unwrap();
        assert_eq!(link.href(), "https://api.example.com/subscribers");
        assert!(find_link(json, "next").unwrap().is_none());
    }

    #[test]
    fn test_find_link_relative_href_is_invalid_argument() {
        let json = r#"[{"href": "/channel/1", "rel": "channel"}]"#;
        let err = find_link(json, "channel").unwrap_err();
        assert!(err.is_invalid_argument());

        let err = find_link(r#"[{"href": "", "rel": "next"}]"#, "next").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_find_link_invalid_json() {
        let err = find_link("{", "next").unwrap_err();
        assert!(err.to_string().starts_with("Invalid link list"));
    }
}

//! Paging parameter builder

use super::types::{Filter, PageCriteria, PaginationParameters, ParamName};
use crate::error::{Error, Result};
use chrono::SecondsFormat;

/// Literal sent for an enabled `expand` flag
pub const EXPAND_TOKEN: &str = "true";

/// Translate paging intent into query parameters
///
/// Emits `cursor`, then `pageSize`, then each filter in the order given.
/// `since` is rendered as a UTC timestamp such as `2024-03-01T09:30:00Z`.
pub fn build_paging_parameters(
    criteria: &PageCriteria,
    filters: &[Filter],
) -> Result<PaginationParameters> {
    let mut builder = PaginationParameters::builder();

    if let Some(cursor) = &criteria.cursor {
        builder.add(ParamName::Cursor, cursor.as_str());
    }

    if let Some(page_size) = criteria.page_size {
        if page_size <= 0 {
            return Err(Error::invalid_argument(format!(
                "page size must be a positive integer, got {page_size}"
            )));
        }
        builder.add(ParamName::PageSize, page_size.to_string());
    }

    for filter in filters {
        match filter {
            Filter::Since(since) => {
                builder.add(
                    ParamName::Since,
                    since.to_rfc3339_opts(SecondsFormat::Secs, true),
                );
            }
            Filter::Expand(true) => {
                builder.add(ParamName::Expand, EXPAND_TOKEN);
            }
            Filter::Expand(false) => {}
        }
    }

    Ok(builder.build())
}

//! Link lookup and Link header parsing

use super::types::{Link, Relation};
use crate::error::{Error, Result};
use url::Url;

/// Find the first link carrying `relation`
///
/// An absent or empty sequence, or one without a match, yields `Ok(None)`.
/// A blank relation name is a caller error.
pub fn find_link_with_type<'a, R>(
    links: Option<&'a [Link]>,
    relation: R,
) -> Result<Option<&'a Link>>
where
    R: AsRef<str>,
{
    let rel = relation.as_ref();
    if rel.trim().is_empty() {
        return Err(Error::invalid_argument("link relation identifier is required"));
    }

    Ok(links
        .unwrap_or_default()
        .iter()
        .find(|link| link.has_rel(rel)))
}

/// Find the first `next` link
pub fn find_next_page_link(links: Option<&[Link]>) -> Option<&Link> {
    links
        .unwrap_or_default()
        .iter()
        .find(|link| link.has_rel(Relation::Next.as_str()))
}

/// Parse an RFC 8288 `Link` header into links
///
/// Format: `<https://api.example.com/items?cursor=abc>; rel="next", ...`
///
/// Relative targets are resolved against `base`. A `rel` holding several
/// space separated relation types produces one link per type. Entries
/// without a target, without a rel, or with an unresolvable target are
/// skipped. Commas and semicolons separate entries and parameters only
/// outside `<...>` targets and quoted strings.
pub fn parse_link_header(header: &str, base: Option<&Url>) -> Vec<Link> {
    let mut links = Vec::new();

    for part in split_outside_target(header, ',') {
        let part = part.trim();
        let mut target = None;
        let mut rels = None;

        for segment in split_outside_target(part, ';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                target = Some(&segment[1..segment.len() - 1]);
            } else if let Some((name, value)) = segment.split_once('=') {
                if name.trim().eq_ignore_ascii_case("rel") {
                    rels = Some(value.trim().trim_matches('"').trim_matches('\''));
                }
            }
        }

        let (Some(target), Some(rels)) = (target, rels) else {
            continue;
        };

        let href = match base {
            Some(base) => match base.join(target) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            },
            None => target.to_string(),
        };

        for rel in rels.split_whitespace() {
            if let Ok(link) = Link::new(href.clone(), rel) {
                links.push(link);
            }
        }
    }

    links
}

/// Split on `separator` while ignoring it inside `<...>` and `"..."`
fn split_outside_target(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_target = false;
    let mut in_quotes = false;

    for (index, c) in input.char_indices() {
        match c {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            c if c == separator && !in_target && !in_quotes => {
                parts.push(&input[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
}

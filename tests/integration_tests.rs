//! Integration tests using mock HTTP server
//!
//! Tests the full flow: YAML client config → HTTP page requests → next-link
//! parsing → follow-up requests

use chrono::{TimeZone, Utc};
use hateoas_paging::engine::{HttpPageSource, PageWalker};
use hateoas_paging::links::parse_link_header;
use hateoas_paging::pagination::CursorPager;
use hateoas_paging::{
    build_paging_parameters, find_link_with_type, find_next_page_link, load_config_from_str,
    parse_next_page_url, Error, Filter, Link, Page, PageCriteria, Relation,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Subscribers {
    subscribers: Vec<Subscriber>,
}

#[derive(Debug, Deserialize)]
struct Subscriber {
    id: u64,
}

// ============================================================================
// End-to-End Walk Tests
// ============================================================================

#[tokio::test]
async fn test_cursor_walk_from_config() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Page 3 (last, no next link)
    Mock::given(method("GET"))
        .and(path("/channel/7/subscribers"))
        .and(query_param("cursor", "c3"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [{"href": format!("{base}/channel/7/subscribers?cursor=c3"), "rel": "self"}],
            "subscribers": [{"id": 5}]
        })))
        .mount(&mock_server)
        .await;

    // Page 2 (cursor not first in the query)
    Mock::given(method("GET"))
        .and(path("/channel/7/subscribers"))
        .and(query_param("cursor", "c2"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [
                {"href": format!("{base}/channel/7/subscribers?pageSize=2&cursor=c3"), "rel": "next"}
            ],
            "subscribers": [{"id": 3}, {"id": 4}]
        })))
        .mount(&mock_server)
        .await;

    // Page 1
    Mock::given(method("GET"))
        .and(path("/channel/7/subscribers"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [
                {"href": format!("{base}/channel/7"), "rel": "channel"},
                {"href": format!("{base}/channel/7/subscribers?cursor=c2&pageSize=2"), "rel": "next"}
            ],
            "subscribers": [{"id": 1}, {"id": 2}]
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    let yaml = format!(
        "base_url: {base}\nauth:\n  type: bearer\n  token: secret\npaging:\n  page_size: 2\n"
    );
    let config = load_config_from_str(&yaml).unwrap();
    let client = config.build_client().unwrap();
    let pager = CursorPager::new(config.page_criteria(), vec![]).unwrap();

    let pages: Vec<Page<Subscribers>> =
        PageWalker::new(HttpPageSource::new(&client, "/channel/7/subscribers"), pager)
            .with_config(config.walk_config())
            .collect()
            .await
            .unwrap();

    let ids: Vec<u64> = pages
        .iter()
        .flat_map(|page| page.resource.subscribers.iter().map(|s| s.id))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(!pages[2].has_next());
}

#[tokio::test]
async fn test_walk_stops_at_page_limit() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/webcasts?cursor=again", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/webcasts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [{"href": next, "rel": "next"}],
            "webcasts": []
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let yaml = format!("base_url: {}\npaging:\n  max_pages: 2\n", mock_server.uri());
    let config = load_config_from_str(&yaml).unwrap();
    let client = config.build_client().unwrap();
    let pager = CursorPager::new(config.page_criteria(), vec![]).unwrap();

    let mut walker = PageWalker::new(HttpPageSource::new(&client, "/webcasts"), pager)
        .with_config(config.walk_config());
    let pages: Vec<Page<Value>> = walker_pages(&mut walker).await;

    assert_eq!(pages.len(), 2);
    assert_eq!(walker.stats().pages_fetched, 2);
}

async fn walker_pages(walker: &mut PageWalker<HttpPageSource<'_>>) -> Vec<Page<Value>> {
    let mut pages = Vec::new();
    while let Some(page) = walker.next_page().await.unwrap() {
        pages.push(page);
    }
    pages
}

#[tokio::test]
async fn test_walk_surfaces_http_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/surveys"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let config = load_config_from_str(&format!("base_url: {}\n", mock_server.uri())).unwrap();
    let client = config.build_client().unwrap();
    let pager = CursorPager::new(PageCriteria::new(), vec![]).unwrap();

    let err = PageWalker::new(HttpPageSource::new(&client, "/surveys"), pager)
        .collect::<Value>()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 403, ref body } if body == "forbidden"));
}

// ============================================================================
// Parameter / URL Round Trip Tests
// ============================================================================

#[test]
fn test_next_link_to_follow_up_request() {
    let body = json!({
        "links": [
            {"href": "https://api.example.com/v1/channel/1/webcasts", "rel": "self"},
            {"href": "https://api.example.com/v1/channel/1/webcasts?since=x&cursor=b%2Fc%3D&pageSize=50", "rel": "next"}
        ],
        "webcasts": []
    });
    let page: Page<Value> = serde_json::from_value(body).unwrap();

    let next = page.next_page_url().unwrap().unwrap();
    assert_eq!(next.cursor(), "b/c=");

    let since = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let params = build_paging_parameters(
        &next.to_page_criteria(Some(50)),
        &[Filter::Since(since), Filter::Expand(true)],
    )
    .unwrap();

    let mut url = Url::parse("https://api.example.com/v1/channel/1/webcasts").unwrap();
    params.apply_to(&mut url);

    let reparsed = parse_next_page_url(url.as_str()).unwrap();
    assert_eq!(reparsed.cursor(), "b/c=");
    assert_eq!(params.first("since"), Some("2024-03-01T09:30:00Z"));
    assert_eq!(params.first("expand"), Some("true"));
}

#[test]
fn test_lookup_over_public_api() {
    let links = vec![
        Link::new("https://api.example.com/channel/1", "channel").unwrap(),
        Link::new("https://api.example.com/channel/1/surveys", "surveys").unwrap(),
        Link::new("https://api.example.com/channel/1/surveys?cursor=z", "next").unwrap(),
    ];

    let surveys = find_link_with_type(Some(links.as_slice()), Relation::Surveys)
        .unwrap()
        .unwrap();
    assert_eq!(surveys.href(), "https://api.example.com/channel/1/surveys");

    let next = find_next_page_link(Some(links.as_slice())).unwrap();
    assert_eq!(parse_next_page_url(next.href()).unwrap().cursor(), "z");

    assert!(find_link_with_type(None, Relation::Next).unwrap().is_none());
    assert!(find_link_with_type(Some(links.as_slice()), "")
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_link_header_pagination_flow() {
    let base = Url::parse("https://api.example.com/v1/webcasts").unwrap();
    let header = r#"</v1/webcasts?cursor=page2&pageSize=10>; rel="next", </v1/webcasts>; rel="self first""#;

    let links = parse_link_header(header, Some(&base));
    assert_eq!(links.len(), 3);

    let next = find_next_page_link(Some(links.as_slice())).unwrap();
    assert_eq!(
        next.href(),
        "https://api.example.com/v1/webcasts?cursor=page2&pageSize=10"
    );

    let mut pager = CursorPager::new(PageCriteria::new().with_page_size(10), vec![]).unwrap();
    let step = pager.process_links(&links).unwrap();
    assert!(step.is_continue());
    assert_eq!(
        pager.current_params().unwrap().to_query_string(),
        "cursor=page2&pageSize=10"
    );
}

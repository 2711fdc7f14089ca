//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use crate::pagination::{build_paging_parameters, PageCriteria};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("hateoas-paging/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("Accept", "application/json")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_params_keep_order() {
    let params =
        build_paging_parameters(&PageCriteria::new().with_cursor("c1").with_page_size(5), &[])
            .unwrap();
    let config = RequestConfig::new().query("channel", "1").params(&params);

    assert_eq!(
        config.query,
        vec![
            ("channel".to_string(), "1".to_string()),
            ("cursor".to_string(), "c1".to_string()),
            ("pageSize".to_string(), "5".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_http_client_get_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channel/1/webcasts"))
        .and(query_param("cursor", "c1"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [
                {"href": format!("{}/channel/1/webcasts?cursor=c2", mock_server.uri()), "rel": "next"}
            ],
            "webcasts": [{"id": 1}, {"id": 2}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params =
        build_paging_parameters(&PageCriteria::new().with_cursor("c1").with_page_size(2), &[])
            .unwrap();

    let page = client
        .get_page::<Value>("/channel/1/webcasts", &params)
        .await
        .unwrap();

    assert_eq!(page.resource["webcasts"].as_array().unwrap().len(), 2);
    assert_eq!(page.next_page_url().unwrap().unwrap().cursor(), "c2");
}

#[tokio::test]
async fn test_http_client_absolute_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/absolute"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("http://unused.invalid")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let body: Value = client
        .get_json(&format!("{}/absolute", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_http_client_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/missing").await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/flaky").await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_client_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_json::<Value>("/broken").await.unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_http_client_applies_auth_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/protected"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("X-Default", "yes"))
        .and(header("X-Request", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Default", "yes")
        .build();
    let client = HttpClient::with_auth(
        config,
        AuthConfig::Bearer {
            token: "test-token".to_string(),
        },
    )
    .unwrap();

    let body: Value = client
        .get_json_with_config("/protected", RequestConfig::new().header("X-Request", "1"))
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

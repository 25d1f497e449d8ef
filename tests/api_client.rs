//! HTTP behavior of the ApiClient against a mock server

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bbstui::domain::forum::{Collection, Page};
use bbstui::infrastructure::api::{ApiClient, ApiError};

fn posts_collection(thread_id: &str) -> Collection {
    Collection::Posts {
        thread_id: thread_id.to_string(),
    }
}

#[tokio::test]
async fn fetch_threads_parses_a_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "General" },
            { "id": 2, "title": "Random" },
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let page = client
        .fetch_page(&Collection::Threads, 0)
        .await
        .expect("page");

    match page {
        Page::Threads(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].id, 1);
            assert_eq!(items[0].title, "General");
        }
        other => panic!("Expected threads page, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_posts_parses_the_wrapped_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/42/posts"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [ { "id": "p-1", "post": "hello" } ]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let page = client
        .fetch_page(&posts_collection("42"), 10)
        .await
        .expect("page");

    match page {
        Page::Posts(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, "p-1");
            assert_eq!(items[0].post, "hello");
        }
        other => panic!("Expected posts page, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_carries_the_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .fetch_page(&Collection::Threads, 0)
        .await
        .expect_err("error");

    assert_eq!(err, ApiError::Status(503));
    assert_eq!(err.to_string(), "Error: 503");
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    // An object where an array is promised
    Mock::given(method("GET"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "nope": true })))
        .mount(&server)
        .await;
    // A missing field in the posts wrapper
    Mock::given(method("GET"))
        .and(path("/threads/1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());

    let err = client
        .fetch_page(&Collection::Threads, 0)
        .await
        .expect_err("error");
    assert_eq!(err, ApiError::Parse);

    let err = client
        .fetch_page(&posts_collection("1"), 0)
        .await
        .expect_err("error");
    assert_eq!(err, ApiError::Parse);
    assert_eq!(err.to_string(), "Unexpected response format");
}

#[tokio::test]
async fn create_thread_posts_the_title() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads"))
        .and(body_json(json!({ "title": "hello" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client
        .create_item(&Collection::Threads, "hello")
        .await
        .expect("created");
}

#[tokio::test]
async fn create_post_posts_the_body_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/9/posts"))
        .and(body_json(json!({ "post": "first!" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client
        .create_item(&posts_collection("9"), "first!")
        .await
        .expect("created");
}

#[tokio::test]
async fn failed_create_reports_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .create_item(&Collection::Threads, "hello")
        .await
        .expect_err("error");

    assert_eq!(err, ApiError::Status(500));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client
        .fetch_page(&Collection::Threads, 0)
        .await
        .expect_err("error");

    assert!(matches!(err, ApiError::Transport(_)));
}

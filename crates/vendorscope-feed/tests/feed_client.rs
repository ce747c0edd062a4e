//! Integration tests for `FeedClient` using wiremock HTTP mocks.

use serde_json::json;
use vendorscope_core::{MediaDescriptor, PostSource};
use vendorscope_feed::{FeedClient, FeedError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FeedClient {
    FeedClient::new(base_url, "test-token", 5, "vendorscope-test/0.1")
        .expect("client construction should not fail")
}

// ---------------------------------------------------------------------------
// authenticate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authenticate_succeeds_with_valid_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"id": 1})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.authenticate().await.expect("auth should succeed");
}

#[tokio::test]
async fn authenticate_maps_401_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.authenticate().await;
    assert!(
        matches!(result, Err(FeedError::Unauthorized { status: 401 })),
        "expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn authenticate_maps_500_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.authenticate().await;
    assert!(
        matches!(result, Err(FeedError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// fetch_posts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_posts_parses_envelope() {
    let server = MockServer::start().await;

    let body = json!({
        "posts": [
            {
                "id": 42,
                "date": "2025-03-02T08:30:00Z",
                "text": "Price 1500 Birr",
                "views": 120,
                "media": {"kind": "photo"}
            },
            {
                "id": 41,
                "date": "2025-03-01T08:30:00Z",
                "media": {"kind": "document", "mime_type": "application/pdf"}
            },
            {
                "id": 40,
                "date": "2025-02-28T08:30:00Z",
                "text": "see link",
                "media": {"kind": "webpage"}
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/channels/nevacomputer/posts"))
        .and(query_param("limit", "3"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let posts = client
        .fetch_posts("nevacomputer", 3)
        .await
        .expect("should parse posts");

    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, 42);
    assert_eq!(posts[0].views, Some(120));
    assert_eq!(posts[0].media, Some(MediaDescriptor::Photo));
    assert!(posts[1].text.is_none());
    assert!(posts[1].views.is_none());
    assert_eq!(
        posts[1].media,
        Some(MediaDescriptor::Document {
            mime_type: Some("application/pdf".to_string())
        })
    );
    assert_eq!(posts[2].media, Some(MediaDescriptor::Unsupported));
}

#[tokio::test]
async fn fetch_posts_returns_empty_vec_for_empty_channel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/channels/Leyueqa/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"posts": []})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let posts = client.fetch_posts("Leyueqa", 10).await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn fetch_posts_maps_404_to_channel_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/channels/missing/posts"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_posts("missing", 10).await;
    assert!(
        matches!(result, Err(FeedError::ChannelNotFound { ref channel }) if channel == "missing"),
        "expected ChannelNotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_posts_reports_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/channels/ZemenExpress/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_posts("ZemenExpress", 10).await;
    assert!(
        matches!(result, Err(FeedError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// download_media
// ---------------------------------------------------------------------------

#[tokio::test]
async fn download_media_writes_bytes_to_destination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/channels/ZemenExpress/posts/42/media"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested").join("42_1740904200.jpg");

    let post: vendorscope_core::RawPost = serde_json::from_value(json!({
        "id": 42,
        "date": "2025-03-02T08:30:00Z",
        "media": {"kind": "photo"}
    }))
    .unwrap();

    let client = test_client(&server.uri());
    let written = client
        .download_media("ZemenExpress", &post, &dest)
        .await
        .expect("download should succeed");

    assert_eq!(written, dest);
    assert_eq!(std::fs::read(&dest).unwrap(), vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn download_media_propagates_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/channels/ZemenExpress/posts/9/media"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("9_0.bin");

    let client = test_client(&server.uri());
    let result = client.fetch_media("ZemenExpress", 9, &dest).await;
    assert!(
        matches!(result, Err(FeedError::UnexpectedStatus { status: 502, .. })),
        "expected UnexpectedStatus(502), got: {result:?}"
    );
    assert!(!dest.exists());
}

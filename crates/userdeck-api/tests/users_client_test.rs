#![allow(clippy::unwrap_used)]
// Integration tests for `UsersClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use userdeck_api::{Error, UsersClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, UsersClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = UsersClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn two_users() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "John Doe",
            "username": "johndoe",
            "email": "john@example.com",
            "address": {
                "street": "Main St",
                "suite": "Apt 1",
                "city": "New York",
                "zipcode": "10001",
                "geo": { "lat": "40.7128", "lng": "-74.0060" }
            },
            "phone": "123-456-7890",
            "website": "example.com",
            "company": {
                "name": "Example Inc",
                "catchPhrase": "Making examples since 2023",
                "bs": "innovative examples"
            }
        },
        {
            "id": 2,
            "name": "Jane Smith",
            "username": "janesmith",
            "email": "jane@example.com",
            "address": {
                "street": "Broadway",
                "suite": "Suite 200",
                "city": "New York",
                "zipcode": "10002",
                "geo": { "lat": "40.7128", "lng": "-74.0060" }
            },
            "phone": "098-765-4321",
            "website": "janesmith.com",
            "company": {
                "name": "Smith Co",
                "catchPhrase": "Quality is our priority",
                "bs": "customer-focused solutions"
            }
        }
    ])
}

// ── Success ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_users_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_users()))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.fetch_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "John Doe");
    assert_eq!(users[0].username, "johndoe");
    assert_eq!(users[0].company.catch_phrase, "Making examples since 2023");
    assert_eq!(users[1].name, "Jane Smith");
    // Geo strings come back untouched, trailing zero included.
    assert_eq!(users[0].address.geo.lng, "-74.0060");
}

#[tokio::test]
async fn test_fetch_users_empty_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let users = client.fetch_users().await.unwrap();
    assert!(users.is_empty());
}

// ── Status errors ───────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_users_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.fetch_users().await;

    assert!(
        matches!(result, Err(Error::HttpStatus { status: 404 })),
        "expected HttpStatus 404, got: {result:?}"
    );
    assert_eq!(result.unwrap_err().to_string(), "HTTP error: status 404");
}

#[tokio::test]
async fn test_fetch_users_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.fetch_users().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

// ── Body errors ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_users_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;

    let result = client.fetch_users().await;

    match result {
        Err(Error::Deserialization { body, .. }) => assert_eq!(body, r#"{"users":[]}"#),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

// ── Transport errors ────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_users_connection_refused() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let base_url = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();

    let client = UsersClient::with_client(reqwest::Client::new(), base_url);
    let result = client.fetch_users().await;

    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
    assert!(result.unwrap_err().is_transport());
}

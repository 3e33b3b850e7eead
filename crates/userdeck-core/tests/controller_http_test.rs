#![allow(clippy::unwrap_used)]
// End-to-end load: `Controller::initialize` driving the real HTTP client
// against a wiremock server.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use userdeck_core::{Controller, FETCH_FAILED_MESSAGE, LoadState, SourceConfig, UserId};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, userdeck_api::UsersClient) {
    let server = MockServer::start().await;
    let client = SourceConfig::new(Url::parse(&server.uri()).unwrap())
        .build_client()
        .unwrap();
    (server, client)
}

fn user_json(id: i64, name: &str, username: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "email": format!("{username}@example.com"),
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
    })
}

// ── Tests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn initialize_over_http_lands_ready() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            user_json(1, "John Doe", "johndoe"),
            user_json(2, "Jane Smith", "janesmith"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = Controller::new();
    assert!(controller.state().is_loading());
    controller.initialize(&client).await;

    let state = controller.state();
    assert!(matches!(state.load_state(), LoadState::Ready(_)));
    assert!(state.error().is_none());
    let names: Vec<_> = state.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith"]);
    assert_eq!(
        state.user(UserId(2)).unwrap().company.catch_phrase,
        "Making examples since 2023"
    );

    // A second initialize never refetches (`expect(1)` is checked on drop)
    controller.initialize(&client).await;
    assert_eq!(controller.state().users().len(), 2);
}

#[tokio::test]
async fn initialize_over_http_server_error_fails_with_fixed_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut controller = Controller::new();
    controller.initialize(&client).await;

    let state = controller.state();
    assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
    assert!(!state.is_loading());
    assert!(state.users().is_empty());
}

#[tokio::test]
async fn initialize_over_http_bad_body_fails_with_fixed_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut controller = Controller::new();
    controller.initialize(&client).await;

    assert_eq!(
        controller.state().load_state(),
        &LoadState::Failed {
            message: FETCH_FAILED_MESSAGE.into()
        }
    );
}

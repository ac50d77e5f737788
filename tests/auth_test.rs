use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zjazd::api::ApiError;
use zjazd::auth::provider::IdentityClient;

#[tokio::test]
async fn test_exchange_code_returns_the_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let identity = IdentityClient::new(server.uri());
    let token = identity.exchange_code("abc").await.unwrap();
    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn test_exchange_code_rejection_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let identity = IdentityClient::new(server.uri());
    let err = identity.exchange_code("bad").await.expect_err("400 must fail");
    assert!(matches!(err, ApiError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn test_session_with_valid_token_carries_a_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .and(header("Authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "name": "Ola Nowak", "slug": "ola-nowak"
        })))
        .mount(&server)
        .await;

    let identity = IdentityClient::new(server.uri());
    let user = identity.session("tok-123").await.unwrap().expect("user present");
    assert_eq!(user.name, "Ola Nowak");
}

#[tokio::test]
async fn test_rejected_token_is_an_absent_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let identity = IdentityClient::new(server.uri());
    assert!(identity.session("expired").await.unwrap().is_none());
}

#[tokio::test]
async fn test_provider_outage_bubbles_as_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let identity = IdentityClient::new(server.uri());
    let err = identity.session("tok").await.expect_err("500 must fail");
    assert!(matches!(err, ApiError::Http(_)), "got {err:?}");
}

#[test]
fn test_authorize_url_encodes_the_redirect() {
    let identity = IdentityClient::new("https://id.example");
    let url = identity.authorize_url("http://127.0.0.1:8080/auth/callback");
    assert!(url.starts_with("https://id.example/authorize?redirect_uri="));
    assert!(url.contains("%2F%2F127.0.0.1"), "got: {url}");
}

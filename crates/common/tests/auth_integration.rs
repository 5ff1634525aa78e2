//! Integration tests for the client-credentials token cache
//!
//! Drives `TokenCache` end to end against a mock token endpoint, advancing
//! a `MockClock` through the token lifetime.

use std::sync::Arc;
use std::time::Duration;

use gameshelf_common::auth::{
    AuthError, ClientCredentialsClient, MemoryTokenStore, TokenCache, TokenStore, TOKEN_CACHE_KEY,
};
use gameshelf_common::testing::MockClock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_client(server: &MockServer) -> ClientCredentialsClient {
    ClientCredentialsClient::new(
        reqwest::Client::new(),
        &format!("{}/oauth2", server.uri()),
        "client",
        "secret",
    )
    .expect("token client")
}

#[tokio::test]
async fn token_is_reused_for_3300_seconds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "T", "expires_in": 3600})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let clock = MockClock::new();
    let store = Arc::new(MemoryTokenStore::with_clock(clock.clone()));
    let cache = TokenCache::new(token_client(&server), store);

    for _ in 0..5 {
        assert_eq!(cache.get_or_refresh().await.unwrap(), "T");
        clock.advance(Duration::from_secs(600));
    }
    // 3000s elapsed; still inside the cached window
    clock.advance(Duration::from_secs(299));
    assert_eq!(cache.get_or_refresh().await.unwrap(), "T");

    server.verify().await;
}

#[tokio::test]
async fn reauthenticates_exactly_once_after_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "T", "expires_in": 3600})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clock = MockClock::new();
    let store = Arc::new(MemoryTokenStore::with_clock(clock.clone()));
    let cache = TokenCache::new(token_client(&server), store);

    cache.get_or_refresh().await.unwrap();
    clock.advance(Duration::from_secs(3300));
    cache.get_or_refresh().await.unwrap();
    cache.get_or_refresh().await.unwrap();
    clock.advance(Duration::from_secs(100));
    cache.get_or_refresh().await.unwrap();

    server.verify().await;
}

#[tokio::test]
async fn missing_access_token_fails_and_caches_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"expires_in": 3600})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let cache = TokenCache::new(token_client(&server), store.clone());

    assert!(matches!(cache.get_or_refresh().await, Err(AuthError::MissingAccessToken)));
    assert_eq!(store.get(TOKEN_CACHE_KEY), None);

    // Nothing was cached, so the next call authenticates again
    assert!(cache.get_or_refresh().await.is_err());
    server.verify().await;
}

#[tokio::test]
async fn default_lifetime_applies_when_expires_in_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "D"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let clock = MockClock::new();
    let store = Arc::new(MemoryTokenStore::with_clock(clock.clone()));
    let cache = TokenCache::new(token_client(&server), store);

    cache.get_or_refresh().await.unwrap();
    clock.advance(Duration::from_secs(3299));
    cache.get_or_refresh().await.unwrap();
    clock.advance(Duration::from_secs(1));
    cache.get_or_refresh().await.unwrap();

    server.verify().await;
}

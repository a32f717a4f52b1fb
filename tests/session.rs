//! Guarded navigation backed by the token store.

use std::sync::Arc;

use chrono::Duration;
use console_router::navigation::Router;
use console_router::routing::console_routes;
use console_router::session::{AccessToken, SessionAuth, TokenStore};
use console_router::NavigationGuard;

mod common;

#[tokio::test]
async fn test_login_and_logout_flow() {
    let store = Arc::new(TokenStore::in_memory());
    let table = Arc::new(console_routes().unwrap());
    let mut router = Router::new(table, NavigationGuard::new(SessionAuth::new(store.clone())));

    let nav = router.push("/index").await.unwrap();
    assert_eq!(nav.to.name, "welcome-login");

    store
        .store(AccessToken::expires_in("jwt", Duration::hours(2)).unwrap(), false)
        .unwrap();
    let nav = router.push("/").await.unwrap();
    assert_eq!(nav.to.name, "manage");

    store.clear().unwrap();
    let nav = router.push("/index/events-notifications").await.unwrap();
    assert_eq!(nav.to.name, "welcome-login");
}

#[tokio::test]
async fn test_expired_token_means_unauthorized() {
    let store = Arc::new(TokenStore::in_memory());
    store
        .store(AccessToken::expires_in("old", Duration::seconds(-30)).unwrap(), false)
        .unwrap();
    let table = Arc::new(console_routes().unwrap());
    let mut router = Router::new(table, NavigationGuard::new(SessionAuth::new(store.clone())));

    let nav = router.push("/index/security").await.unwrap();
    assert_eq!(nav.to.name, "welcome-login");
    assert!(store.take().unwrap().is_none());
}

#[tokio::test]
async fn test_remembered_token_seen_by_new_store() {
    let path = common::temp_token_path();
    TokenStore::open(&path)
        .store(AccessToken::expires_in("remember-me", Duration::days(7)).unwrap(), true)
        .unwrap();

    let auth = SessionAuth::new(Arc::new(TokenStore::open(&path)));
    let table = Arc::new(console_routes().unwrap());
    let mut router = Router::new(table, NavigationGuard::new(auth));

    let nav = router.push("/forget").await.unwrap();
    assert_eq!(nav.to.name, "manage");

    TokenStore::open(&path).clear().unwrap();
    let nav = router.push("/index/security").await.unwrap();
    assert_eq!(nav.to.name, "welcome-login");
}

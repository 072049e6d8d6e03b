//! Integration tests for the sign-in / sign-out flow.

use axum::http::StatusCode;

use filedeck_cache::keys;
use filedeck_core::traits::cache::KeyValueStore;

use crate::helpers::{TestApp, basic_auth};

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_sign_in_issues_token() {
    let app = TestApp::new().await;
    let user_id = app.seed_user("bob@dylan.com", "toto1234!").await;

    let auth = basic_auth("bob@dylan.com", "toto1234!");
    let response = app
        .request("GET", "/connect", None, &[("Authorization", &auth)])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();

    // The token maps to the user id in the key-value store.
    let stored = app.cache.get(&keys::auth_token(token)).await.unwrap();
    assert_eq!(stored, Some(user_id.to_string()));
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_sign_in_with_bad_credentials() {
    let app = TestApp::new().await;
    app.seed_user("bob@dylan.com", "toto1234!").await;

    let wrong_password = basic_auth("bob@dylan.com", "wrong");
    let unknown_email = basic_auth("nobody@dylan.com", "toto1234!");
    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![],
        vec![("Authorization", "Basic")],
        vec![("Authorization", wrong_password.as_str())],
        vec![("Authorization", unknown_email.as_str())],
    ];

    for headers in &cases {
        let response = app.request("GET", "/connect", None, headers).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, serde_json::json!({"error": "Unauthorized"}));
    }
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_sign_out_revokes_token() {
    let app = TestApp::new().await;
    app.seed_user("bob@dylan.com", "toto1234!").await;

    let auth = basic_auth("bob@dylan.com", "toto1234!");
    let response = app
        .request("GET", "/connect", None, &[("Authorization", &auth)])
        .await;
    let token = response.body["token"].as_str().unwrap().to_string();

    let response = app
        .request("GET", "/disconnect", None, &[("X-Token", &token)])
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // The token no longer resolves.
    let response = app
        .request("GET", "/users/me", None, &[("X-Token", &token)])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Sign-out is idempotent.
    let response = app
        .request("GET", "/disconnect", None, &[("X-Token", &token)])
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_concurrent_sign_ins_coexist() {
    let app = TestApp::new().await;
    app.seed_user("bob@dylan.com", "toto1234!").await;
    let auth = basic_auth("bob@dylan.com", "toto1234!");

    let headers = [("Authorization", auth.as_str())];
    let (first, second) = tokio::join!(
        app.request("GET", "/connect", None, &headers),
        app.request("GET", "/connect", None, &headers),
    );
    let first_token = first.body["token"].as_str().unwrap().to_string();
    let second_token = second.body["token"].as_str().unwrap().to_string();
    assert_ne!(first_token, second_token);

    app.request("GET", "/disconnect", None, &[("X-Token", &first_token)])
        .await;

    let response = app
        .request("GET", "/users/me", None, &[("X-Token", &second_token)])
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

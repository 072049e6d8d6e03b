//! Integration tests for registration and the current-user endpoint.

use axum::http::StatusCode;

use crate::helpers::{TestApp, basic_auth};

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_register_new_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({
                "email": "bob@dylan.com",
                "password": "toto1234!",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["email"], "bob@dylan.com");
    assert!(response.body["id"].as_str().is_some());
    // The digest never leaves the server.
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("password_digest").is_none());
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({"password": "toto1234!"})),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, serde_json::json!({"error": "Missing email"}));

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({"email": "bob@dylan.com"})),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        serde_json::json!({"error": "Missing password"})
    );
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.seed_user("bob@dylan.com", "toto1234!").await;

    let response = app
        .request(
            "POST",
            "/users",
            Some(serde_json::json!({
                "email": "bob@dylan.com",
                "password": "another",
            })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, serde_json::json!({"error": "Already exist"}));
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_registered_user_can_sign_in() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/users",
        Some(serde_json::json!({
            "email": "bob@dylan.com",
            "password": "toto1234!",
        })),
        &[],
    )
    .await;

    let auth = basic_auth("bob@dylan.com", "toto1234!");
    let response = app
        .request("GET", "/connect", None, &[("Authorization", &auth)])
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = response.body["token"].as_str().unwrap().to_string();
    let response = app
        .request("GET", "/users/me", None, &[("X-Token", &token)])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "bob@dylan.com");
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/users/me", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, serde_json::json!({"error": "Unauthorized"}));
}

//! Integration tests for the status and stats endpoints.

use axum::http::StatusCode;

use filedeck_entity::file::FileKind;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_status_reports_both_stores_alive() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/status", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"redis": true, "db": true}));
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_stats_on_empty_database() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/stats", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"users": 0, "files": 0}));
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_stats_counts_users_and_files() {
    let app = TestApp::new().await;

    let user_id = app.seed_user("larry@test.com", "password123").await;
    app.seed_file(user_id, "image.png", FileKind::Image).await;
    app.seed_file(user_id, "file.txt", FileKind::File).await;

    let response = app.request("GET", "/stats", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"users": 1, "files": 2}));
}

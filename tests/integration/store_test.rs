//! Integration tests for the backing store clients themselves.

use std::time::Duration;

use filedeck_core::traits::cache::KeyValueStore;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_redis_ttl_semantics() {
    let app = TestApp::new().await;

    // Missing key reads as absent.
    assert_eq!(app.cache.get("myKey").await.unwrap(), None);

    // A key set with a one-second TTL is readable immediately...
    app.cache
        .set("myKey", "12", Duration::from_secs(1))
        .await
        .unwrap();
    assert_eq!(app.cache.get("myKey").await.unwrap(), Some("12".to_string()));

    // ...and absent after the TTL elapses.
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(app.cache.get("myKey").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_store_liveness_probes() {
    let app = TestApp::new().await;

    assert!(app.cache.is_alive());
    assert!(app.cache.health_check().await.unwrap());
    assert!(app.db.is_alive());
    assert!(app.db.health_check().await.unwrap());
}

#[tokio::test]
#[ignore = "requires local PostgreSQL and Redis"]
async fn test_redis_delete_is_idempotent() {
    let app = TestApp::new().await;

    app.cache
        .set("toDelete", "value", Duration::from_secs(60))
        .await
        .unwrap();
    app.cache.delete("toDelete").await.unwrap();
    assert_eq!(app.cache.get("toDelete").await.unwrap(), None);

    // Deleting again (and deleting a never-set key) still succeeds.
    app.cache.delete("toDelete").await.unwrap();
    app.cache.delete("neverSet").await.unwrap();
}

mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    common::create_test_mapping(&pool, "https://example.com", "abcd2345").await;
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 1 mappings"
    );
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_health_endpoint_degraded(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[sqlx::test]
async fn test_redirect_with_closed_pool_is_unavailable(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());
    pool.close().await;

    let response = server.get("/abcd2345").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "service_unavailable"
    );
}

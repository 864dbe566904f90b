mod common;

use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(
        json["short_url"],
        format!("{}/{}", common::BASE_URL, code)
    );
    assert!(json.get("id").is_none());
}

#[sqlx::test]
async fn test_shorten_same_url_returns_same_code(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let first = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(
        common::count_mappings_for_url(&pool, "https://example.com").await,
        1
    );
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_non_http_scheme(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_missing_field(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.post("/shorten").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}

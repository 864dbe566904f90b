mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_test_mapping(&pool, "https://example.com/target", "redir234").await;
    let server = common::create_test_server(pool);

    let response = server.get("/redir234").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_after_shorten(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let code = server
        .post("/shorten")
        .json(&serde_json::json!({ "original_url": "https://example.com/test-redirect" }))
        .await
        .json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{}", code)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://example.com/test-redirect"
    );
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/nonexistentcode").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Short URL not found");
    assert_eq!(json["error"]["details"]["code"], "nonexistentcode");
}

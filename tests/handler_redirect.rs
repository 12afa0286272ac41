mod common;

use axum_test::TestServer;
use minilink::routes::app_router;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(app_router(state)).unwrap();

    common::insert_link(&pool, "abc123", "https://example.com/target").await;

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool).await;
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found");
}

#[sqlx::test]
async fn test_redirect_blank_code_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool).await;
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/%20%20").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_code_surrounded_by_whitespace(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(app_router(state)).unwrap();

    common::insert_link(&pool, "padded", "https://example.com").await;

    let response = server.get("/%20padded%20").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[sqlx::test]
async fn test_redirect_duplicate_codes_resolve_to_earliest(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(app_router(state)).unwrap();

    common::insert_link(&pool, "dup001", "https://first.example.com").await;
    common::insert_link(&pool, "dup001", "https://second.example.com").await;

    let response = server.get("/dup001").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://first.example.com");
}

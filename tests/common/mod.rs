#![allow(dead_code)]

use minilink::db;
use minilink::service::LinkService;
use minilink::state::AppState;
use sqlx::SqlitePool;

pub const TEST_BASE_URL: &str = "http://localhost";

pub async fn create_test_state(pool: SqlitePool) -> AppState {
    db::init_schema(&pool).await.unwrap();
    AppState::new(LinkService::new(pool), TEST_BASE_URL.to_string())
}

pub async fn insert_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_url, long_url) VALUES (?, ?)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Returns the code of the single stored row; panics if there is not
/// exactly one.
pub async fn only_code(pool: &SqlitePool) -> String {
    sqlx::query_scalar::<_, String>("SELECT short_url FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

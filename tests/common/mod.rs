#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::SqlitePool;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tinylink::api::routes::routes;
use tinylink::application::services::ShortenerService;
use tinylink::infrastructure::persistence::SqliteUrlMappingRepository;
use tinylink::state::AppState;
use tinylink::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "http://short.test";

/// Hands out a fixed list of codes, repeating the last one once exhausted.
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    last: String,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: codes.last().map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone())
    }
}

pub fn create_repository(pool: SqlitePool) -> Arc<SqliteUrlMappingRepository> {
    Arc::new(SqliteUrlMappingRepository::new(Arc::new(pool)))
}

pub fn create_service(pool: SqlitePool) -> ShortenerService<SqliteUrlMappingRepository> {
    ShortenerService::new(create_repository(pool))
}

pub fn create_scripted_service(
    pool: SqlitePool,
    codes: &[&str],
    max_attempts: usize,
) -> ShortenerService<SqliteUrlMappingRepository> {
    ShortenerService::with_generator(
        create_repository(pool),
        Arc::new(ScriptedGenerator::new(codes)),
        max_attempts,
    )
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_service(pool)), BASE_URL)
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app: Router = routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

pub async fn create_test_mapping(pool: &SqlitePool, url: &str, code: &str) {
    sqlx::query("INSERT INTO urls (original_url, code) VALUES (?, ?)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings_for_url(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE original_url = ?")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

#![allow(dead_code)]

use click_tracker::application::services::ClickService;
use click_tracker::infrastructure::persistence::{ensure_schema, PgClickRepository};
use click_tracker::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_state(pool: PgPool) -> AppState {
    ensure_schema(&pool).await.unwrap();

    let repository = Arc::new(PgClickRepository::new(Arc::new(pool)));

    AppState {
        click_service: Arc::new(ClickService::new(repository)),
    }
}

pub async fn insert_click(pool: &PgPool, button: &str) {
    sqlx::query("INSERT INTO clicks (button) VALUES ($1)")
        .bind(button)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
        .fetch_one(pool)
        .await
        .unwrap()
}

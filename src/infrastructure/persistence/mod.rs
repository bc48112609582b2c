//! PostgreSQL persistence: repository implementation and schema bootstrap.

pub mod pg_click_repository;

pub use pg_click_repository::PgClickRepository;

use sqlx::PgPool;

/// DDL for the single `clicks` table.
///
/// Idempotent so it can run unconditionally at every process start.
const CLICKS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS clicks (
    id         BIGSERIAL PRIMARY KEY,
    button     TEXT NOT NULL CHECK (button IN ('A', 'B')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates the `clicks` table if it does not exist yet.
///
/// Runs once in [`crate::server::run`] before the listener starts accepting
/// requests.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CLICKS_TABLE_DDL).execute(pool).await?;
    Ok(())
}

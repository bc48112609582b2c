//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Button, ButtonCounts, Click, ParseButtonError};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Row shape returned by statements on the `clicks` table.
#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    button: String,
    created_at: DateTime<Utc>,
}

/// A stored label that does not parse is a broken CHECK constraint.
fn corrupt_label(e: ParseButtonError) -> AppError {
    AppError::internal("Database error", json!({ "cause": e.to_string() }))
}

impl TryFrom<ClickRow> for Click {
    type Error = AppError;

    fn try_from(row: ClickRow) -> Result<Self, Self::Error> {
        let button = row.button.parse::<Button>().map_err(corrupt_label)?;
        Ok(Click::new(row.id, button, row.created_at))
    }
}

/// PostgreSQL repository for click rows.
///
/// Each method runs a single atomic statement on a connection checked out of
/// the pool for just that statement; the connection is returned on every exit
/// path, success or error.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert(&self, button: Button) -> Result<Click, AppError> {
        let row: ClickRow = sqlx::query_as(
            r#"
            INSERT INTO clicks (button)
            VALUES ($1)
            RETURNING id, button, created_at
            "#,
        )
        .bind(button.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn counts(&self) -> Result<ButtonCounts, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT button, COUNT(id)
            FROM clicks
            GROUP BY button
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        // Labels absent from the result stay at zero.
        let mut counts = ButtonCounts::default();
        for (label, count) in rows {
            let button = label.parse::<Button>().map_err(corrupt_label)?;
            counts.add(button, count);
        }

        Ok(counts)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clicks")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}

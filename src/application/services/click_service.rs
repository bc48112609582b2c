//! Click recording and aggregation service.

use std::sync::Arc;

use crate::domain::entities::{Button, ButtonCounts, Click};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service for recording button presses and reading aggregate counts.
///
/// Thin orchestration over [`ClickRepository`]; handlers depend on this type
/// rather than on the repository directly.
pub struct ClickService {
    repository: Arc<dyn ClickRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(repository: Arc<dyn ClickRepository>) -> Self {
        Self { repository }
    }

    /// Records a click for `button` and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the write cannot be committed.
    pub async fn record_click(&self, button: Button) -> Result<Click, AppError> {
        self.repository.insert(button).await
    }

    /// Returns aggregate counts for both buttons, zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn counts(&self) -> Result<ButtonCounts, AppError> {
        self.repository.counts().await
    }

    /// Clears the entire click history.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn clear(&self) -> Result<u64, AppError> {
        self.repository.delete_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_record_click_returns_populated_row() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo
            .expect_insert()
            .withf(|button| *button == Button::A)
            .times(1)
            .returning(|button| Ok(Click::new(7, button, Utc::now())));

        let service = ClickService::new(Arc::new(mock_repo));

        let click = service.record_click(Button::A).await.unwrap();

        assert_eq!(click.id, 7);
        assert_eq!(click.button, Button::A);
    }

    #[tokio::test]
    async fn test_counts_come_from_repository() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo
            .expect_counts()
            .times(1)
            .returning(|| Ok(ButtonCounts { a: 3, b: 2 }));

        let service = ClickService::new(Arc::new(mock_repo));

        let counts = service.counts().await.unwrap();

        assert_eq!(counts.a, 3);
        assert_eq!(counts.b, 2);
    }

    #[tokio::test]
    async fn test_clear_reports_removed_rows() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo.expect_delete_all().times(1).returning(|| Ok(5));

        let service = ClickService::new(Arc::new(mock_repo));

        assert_eq!(service.clear().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock_repo = MockClickRepository::new();

        mock_repo.expect_insert().times(1).returning(|_| {
            Err(AppError::internal(
                "Database error",
                serde_json::json!({ "cause": "connection reset" }),
            ))
        });

        let service = ClickService::new(Arc::new(mock_repo));

        assert!(service.record_click(Button::B).await.is_err());
    }
}

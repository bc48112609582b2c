//! Repository trait for click storage and aggregation.

use async_trait::async_trait;

use crate::domain::entities::{Button, ButtonCounts, Click};
use crate::error::AppError;

/// Repository interface for recording, counting, and clearing clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Inserts a new click row for `button`.
    ///
    /// Returns the fully populated row, including the store-assigned id and
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the write cannot be committed.
    async fn insert(&self, button: Button) -> Result<Click, AppError>;

    /// Returns the total event count per button label across all time.
    ///
    /// Labels with no recorded events are reported as zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn counts(&self) -> Result<ButtonCounts, AppError>;

    /// Deletes all click rows unconditionally. Irreversible.
    ///
    /// Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;
}

//! Handler for the aggregate counts endpoint.

use axum::{extract::State, Json};

use crate::api::dto::counts::CountsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns total click counts per button.
///
/// # Endpoint
///
/// `GET /api/counts`
///
/// # Response
///
/// ```json
/// { "A": 3, "B": 2 }
/// ```
///
/// Both labels are always present; a button with no recorded clicks reports
/// zero.
pub async fn counts_handler(
    State(state): State<AppState>,
) -> Result<Json<CountsResponse>, AppError> {
    let counts = state.click_service.counts().await?;

    Ok(Json(CountsResponse::from(counts)))
}

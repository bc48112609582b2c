//! Handlers for recording and clearing clicks.

use axum::{extract::State, Json};
use serde_json::json;
use validator::Validate;

use crate::api::dto::clicks::{ClearResponse, ClickResponse, CreateClickRequest};
use crate::domain::entities::Button;
use crate::error::AppError;
use crate::state::AppState;

/// Records a single button press.
///
/// # Endpoint
///
/// `POST /api/clicks`
///
/// # Request Body
///
/// ```json
/// { "button": "A" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "button": "A", "created_at": "2026-08-04T12:00:00Z" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `button` is not exactly `"A"` or `"B"`;
/// nothing is written in that case. Storage failures surface as 500 Internal
/// Server Error.
pub async fn create_click_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateClickRequest>,
) -> Result<Json<ClickResponse>, AppError> {
    payload.validate()?;

    let button = payload
        .button
        .parse::<Button>()
        .map_err(|e| AppError::bad_request(e.to_string(), json!({})))?;

    let click = state.click_service.record_click(button).await?;

    Ok(Json(ClickResponse::from(click)))
}

/// Clears the entire click history.
///
/// # Endpoint
///
/// `DELETE /api/clicks/clear`
///
/// Irreversible; removes every recorded click and confirms with a message.
pub async fn clear_clicks_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, AppError> {
    let removed = state.click_service.clear().await?;

    tracing::info!(removed, "click history cleared");

    Ok(Json(ClearResponse {
        message: "All clicks have been cleared.".to_string(),
    }))
}

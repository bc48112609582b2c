//! API route configuration.

use crate::api::handlers::{clear_clicks_handler, counts_handler, create_click_handler};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /clicks`       - Record a button press
/// - `GET    /counts`       - Aggregate counts per button
/// - `DELETE /clicks/clear` - Clear the click history
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/clicks", post(create_click_handler))
        .route("/clicks/clear", delete(clear_clicks_handler))
        .route("/counts", get(counts_handler))
}

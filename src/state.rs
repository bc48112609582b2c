//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ClickService;

/// Process-wide state, constructed once in [`crate::server::run`] before
/// serving and cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub click_service: Arc<ClickService>,
}

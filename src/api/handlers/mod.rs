//! HTTP request handlers for API endpoints.
//!
//! Each handler maps one HTTP operation onto one service call.

pub mod clicks;
pub mod counts;
pub mod health;

pub use clicks::{clear_clicks_handler, create_click_handler};
pub use counts::counts_handler;
pub use health::health_handler;

//! Core domain entities representing the click-tracking data model.
//!
//! Entities are plain data structures without business logic.

pub mod click;

pub use click::{Button, ButtonCounts, Click, ParseButtonError};

//! DTOs for the click recording and clearing endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Button, Click};

/// Compiled regex for button label validation.
static BUTTON_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(A|B)$").unwrap());

/// Request to record a single button press.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClickRequest {
    /// Which button was pressed. Exactly `"A"` or `"B"`.
    #[validate(regex(path = "*BUTTON_REGEX", message = "button must be \"A\" or \"B\""))]
    pub button: String,
}

/// A recorded click, as returned to the caller.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub id: i64,
    pub button: Button,
    pub created_at: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            button: click.button,
            created_at: click.created_at,
        }
    }
}

/// Confirmation returned after clearing the click history.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_pass_validation() {
        for label in ["A", "B"] {
            let request = CreateClickRequest {
                button: label.to_string(),
            };
            assert!(request.validate().is_ok(), "{label:?} should be valid");
        }
    }

    #[test]
    fn test_unknown_labels_fail_validation() {
        for label in ["C", "a", "AB", ""] {
            let request = CreateClickRequest {
                button: label.to_string(),
            };
            assert!(request.validate().is_err(), "{label:?} should be rejected");
        }
    }
}

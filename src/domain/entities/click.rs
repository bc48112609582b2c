//! Click entity and button label domain types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Button label attached to every recorded click.
///
/// Exactly two buttons exist. The label round-trips through JSON and the
/// `clicks.button` column as the bare strings `"A"` and `"B"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
}

impl Button {
    /// String form used in JSON bodies and the database column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known button label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseButtonError(pub String);

impl fmt::Display for ParseButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown button label: {:?}", self.0)
    }
}

impl std::error::Error for ParseButtonError {}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Button::A),
            "B" => Ok(Button::B),
            other => Err(ParseButtonError(other.to_string())),
        }
    }
}

/// A single recorded button-press event.
///
/// Rows are created by the insert operation and destroyed only by the bulk
/// clear; there is no update path.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub button: Button,
    pub created_at: DateTime<Utc>,
}

impl Click {
    /// Creates a Click from store-assigned fields.
    pub fn new(id: i64, button: Button, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            button,
            created_at,
        }
    }
}

/// Aggregate click counts per button label.
///
/// Both labels are always represented; a label with no recorded events stays
/// at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonCounts {
    pub a: i64,
    pub b: i64,
}

impl ButtonCounts {
    /// Total events across both buttons.
    pub fn total(&self) -> i64 {
        self.a + self.b
    }

    /// Adds `count` to the slot for `button`.
    pub fn add(&mut self, button: Button, count: i64) {
        match button {
            Button::A => self.a += count,
            Button::B => self.b += count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_button_parses_known_labels() {
        assert_eq!("A".parse::<Button>().unwrap(), Button::A);
        assert_eq!("B".parse::<Button>().unwrap(), Button::B);
    }

    #[test]
    fn test_button_rejects_unknown_labels() {
        for label in ["C", "a", "b", "AB", ""] {
            assert!(label.parse::<Button>().is_err(), "{label:?} should fail");
        }
    }

    #[test]
    fn test_button_serde_is_bare_string() {
        assert_eq!(serde_json::to_value(Button::A).unwrap(), "A");
        assert_eq!(
            serde_json::from_value::<Button>(serde_json::json!("B")).unwrap(),
            Button::B
        );
    }

    #[test]
    fn test_click_creation() {
        let now = Utc::now();
        let click = Click::new(1, Button::B, now);

        assert_eq!(click.id, 1);
        assert_eq!(click.button, Button::B);
        assert_eq!(click.created_at, now);
    }

    #[test]
    fn test_counts_default_to_zero() {
        let counts = ButtonCounts::default();

        assert_eq!(counts.a, 0);
        assert_eq!(counts.b, 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_add_per_label() {
        let mut counts = ButtonCounts::default();
        counts.add(Button::A, 3);
        counts.add(Button::B, 2);

        assert_eq!(counts.a, 3);
        assert_eq!(counts.b, 2);
        assert_eq!(counts.total(), 5);
    }
}

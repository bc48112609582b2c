//! DTO for the aggregate counts endpoint.

use serde::Serialize;

use crate::domain::entities::ButtonCounts;

/// Aggregate click counts keyed by button label.
///
/// Both labels are always present, zero when no events exist.
#[derive(Debug, Serialize)]
pub struct CountsResponse {
    #[serde(rename = "A")]
    pub a: i64,
    #[serde(rename = "B")]
    pub b: i64,
}

impl From<ButtonCounts> for CountsResponse {
    fn from(counts: ButtonCounts) -> Self {
        Self {
            a: counts.a,
            b: counts.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_uppercase_labels() {
        let response = CountsResponse::from(ButtonCounts { a: 3, b: 2 });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "A": 3, "B": 2 }));
    }
}

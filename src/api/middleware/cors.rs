//! Cross-origin resource sharing configuration.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Builds the CORS layer for the configured allowed origins.
///
/// Browser callers send credentials, and credentialed CORS forbids the `*`
/// wildcard, so methods and headers are mirrored from each preflight request
/// instead.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_accepts_valid_origins() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "https://clicks.example.com".to_string(),
        ];

        assert!(layer(&origins).is_ok());
    }

    #[test]
    fn test_layer_rejects_malformed_origin() {
        let origins = vec!["http://bad\norigin".to_string()];

        assert!(layer(&origins).is_err());
    }
}

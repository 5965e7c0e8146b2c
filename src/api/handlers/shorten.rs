//! Handler for link shortening.

use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Largest shorten body read into memory.
pub const MAX_SHORTEN_BODY_BYTES: usize = 1024 * 1024;

/// Creates a short URL for the long URL in the request body.
///
/// # Endpoint
///
/// `POST /shorten` (any path ending in `/shorten`)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "https://<host>/aZ3k9Q" }
/// ```
///
/// # Errors
///
/// - `400 Invalid request` if the body is not an object with a non-empty `url`
/// - `500 Database error` if the link cannot be stored
pub async fn shorten_handler(
    state: &AppState,
    host: &str,
    body: &[u8],
) -> Result<ApiResponse, AppError> {
    let payload = parse_shorten_request(body)?;

    let link = state.link_service.shorten(&payload.url, host).await?;

    Ok(ApiResponse::Shortened(ShortenResponse {
        short_url: link.short_url,
    }))
}

/// Parses and validates a shorten body.
fn parse_shorten_request(body: &[u8]) -> Result<ShortenRequest, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected shorten body: {}", e);
        AppError::InvalidRequest
    })?;

    payload.validate().map_err(|_| AppError::InvalidRequest)?;

    Ok(payload)
}

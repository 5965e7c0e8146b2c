//! Handler for short URL redirect.

use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// - `400 Invalid URL` if the path is not a single segment
/// - `404 Not found` if the code is unknown or the lookup fails
pub async fn redirect_handler(state: &AppState, path: &str) -> Result<ApiResponse, AppError> {
    let location = state.link_service.resolve(path).await?;

    Ok(ApiResponse::Redirect { location })
}

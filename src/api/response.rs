//! Successful operation results and their HTTP rendering.
//!
//! Together with [`crate::error::AppError`]'s `IntoResponse`, this is the only
//! place transport responses are built.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;

/// Outcome of a routed operation.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiResponse {
    /// `301 Moved Permanently` to the stored long URL.
    Redirect { location: String },
    /// `200 OK` with the JSON shorten payload.
    Shortened(ShortenResponse),
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Shortened(body) => (StatusCode::OK, Json(body)).into_response(),
            ApiResponse::Redirect { location } => match HeaderValue::from_str(&location) {
                Ok(value) => (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)])
                    .into_response(),
                Err(_) => {
                    // URLs are stored unvalidated; one that cannot be sent back
                    // as a header is as unusable as a missing one.
                    error!("Stored URL is not a valid Location header: {:?}", location);
                    AppError::NotFound.into_response()
                }
            },
        }
    }
}

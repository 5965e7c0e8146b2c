//! Request-level error kinds and their HTTP rendering.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const AUTH_REALM: &str = "URL Shortener";

/// Errors a request can end in.
///
/// Every variant maps to exactly one status code and a fixed plain-text body.
/// Internal detail (storage messages, parse errors) is logged where the error
/// is raised and never reaches the response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing or wrong bearer credential.
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP method other than `GET` or `POST`.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// `POST` to a path that does not end in `/shorten`.
    #[error("Not found")]
    RouteNotFound,

    /// Body is not a JSON object with a non-empty `url`.
    #[error("Invalid request")]
    InvalidRequest,

    /// Resolve path is not exactly one segment.
    #[error("Invalid URL")]
    InvalidPath,

    /// The store rejected or failed a write.
    #[error("Database error")]
    StorageFailure,

    /// No record for the code, or the lookup itself failed.
    #[error("Not found")]
    NotFound,
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RouteNotFound | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidRequest | AppError::InvalidPath => StatusCode::BAD_REQUEST,
            AppError::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, self.to_string()).into_response();

        if self == AppError::Unauthorized {
            let challenge = format!("Bearer realm=\"{AUTH_REALM}\"");
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }

        response
    }
}

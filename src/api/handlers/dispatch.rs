//! Request router: picks the operation for an authenticated request.

use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderMap, Method, Uri, header},
};

use crate::api::handlers::shorten::MAX_SHORTEN_BODY_BYTES;
use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Operation selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Shorten,
    Resolve,
}

/// Maps method and path to an operation.
///
/// - `POST` with a path ending in `/shorten` → [`Route::Shorten`]
/// - `POST` anywhere else → [`AppError::RouteNotFound`]
/// - `GET` with any path → [`Route::Resolve`]; the path shape is checked later
/// - any other method → [`AppError::MethodNotAllowed`]
///
/// # Errors
///
/// See the list above.
pub fn route(method: &Method, path: &str) -> Result<Route, AppError> {
    match *method {
        Method::POST if path.ends_with("/shorten") => Ok(Route::Shorten),
        Method::POST => Err(AppError::RouteNotFound),
        Method::GET => Ok(Route::Resolve),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// Host used to build short URLs: the `Host` header, else the URI authority
/// (HTTP/2), else empty.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default()
}

/// Single entry point for every request that passed authentication.
///
/// Mounted as the router fallback so that routing decisions, including 404
/// and 405, follow [`route`] rather than axum's own route table.
///
/// The body stays unread until the request is known to be a shorten, so its
/// size never changes the routing outcome. A body over
/// [`MAX_SHORTEN_BODY_BYTES`] or one that fails mid-read is `400 Invalid request`.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<ApiResponse, AppError> {
    match route(&method, uri.path())? {
        Route::Shorten => {
            let bytes = to_bytes(body, MAX_SHORTEN_BODY_BYTES)
                .await
                .map_err(|e| {
                    tracing::debug!("Failed to read shorten body: {}", e);
                    AppError::InvalidRequest
                })?;

            shorten_handler(&state, request_host(&headers, &uri), &bytes).await
        }
        Route::Resolve => redirect_handler(&state, uri.path()).await,
    }
}

//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Authenticates every request against the configured bearer credential.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The header must match exactly; see
/// [`crate::application::services::authorize`].
///
/// # Errors
///
/// Returns `401 Unauthorized` with
/// `WWW-Authenticate: Bearer realm="URL Shortener"` if the header is missing,
/// not valid UTF-8, or wrong. The request goes no further.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .fallback(dispatch_handler)
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    st.auth_service.authenticate(presented)?;

    Ok(next.run(req).await)
}

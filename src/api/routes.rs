//! Router configuration.
//!
//! # Request Flow
//!
//! 1. **Tracing** - request span and response log
//! 2. **Authentication** - bearer token, 401 on failure
//! 3. **Dispatch** - `POST …/shorten` or `GET /{code}`; everything else is
//!    answered with 404 or 405 by the dispatcher itself

use axum::{Router, middleware};

use crate::api::handlers::dispatch_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;

/// Constructs the application router.
///
/// There are no registered routes: every request lands in the fallback so that
/// authentication always runs before any routing outcome.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch_handler)
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(tracing::layer())
        .with_state(state)
}

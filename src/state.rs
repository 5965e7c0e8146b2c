//! Shared, read-only request state.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::domain::repositories::LinkRepository;

/// State injected into every request.
///
/// Built once at startup; nothing in it is mutated afterwards, so clones are
/// cheap handle copies.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services over a link store and the expected bearer token.
    pub fn new(repository: Arc<dyn LinkRepository>, api_auth_token: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
            auth_service: Arc::new(AuthService::new(api_auth_token)),
        }
    }
}

//! # Short URL
//!
//! A bearer-protected URL shortener over a pluggable key-value store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `ShortLink` entity and the store trait
//! - **Application Layer** ([`application`]) - Auth check, shorten and resolve
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, Redis and in-memory stores
//! - **API Layer** ([`api`]) - Request router, handlers, middleware
//!
//! ## Endpoints
//!
//! Every request must carry `Authorization: Bearer <API_AUTH_TOKEN>`.
//!
//! - `POST /shorten` with `{"url": "..."}` → `{"short_url": "https://<host>/<code>"}`
//! - `GET /{code}` → `301` redirect to the stored URL
//!
//! ## Quick Start
//!
//! ```bash
//! export API_AUTH_TOKEN="change-me"
//! export TABLE_NAME="short_links"
//! export REDIS_URL="redis://localhost:6379"   # or DATABASE_URL=postgres://...
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{LinkRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

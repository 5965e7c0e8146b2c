//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a small API for the
//! request router.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Bearer credential check
//! - [`services::link_service::LinkService`] - Shorten and resolve operations

pub mod services;

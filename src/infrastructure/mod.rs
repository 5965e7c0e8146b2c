//! Infrastructure layer for external integrations.
//!
//! Implements the domain's [`crate::domain::repositories::LinkRepository`]
//! over concrete key-value backends.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL, Redis and in-memory link stores

pub mod persistence;

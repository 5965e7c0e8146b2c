//! HTTP layer: translates requests into service calls and results into
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Request router and operation handlers
//! - [`middleware`] - Authentication and tracing
//! - [`response`] - Rendering of successful results
//! - [`routes`] - Router assembly

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

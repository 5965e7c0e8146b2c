//! Core domain entities.
//!
//! The service has a single entity, [`ShortLink`], keyed by its short code.

pub mod short_link;

pub use short_link::ShortLink;

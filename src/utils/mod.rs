//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`path`] - Short code extraction from request paths

pub mod code_generator;
pub mod path;

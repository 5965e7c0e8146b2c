//! Domain layer: the [`entities::ShortLink`] entity and the
//! [`repositories::LinkRepository`] contract for the external key-value store.
//!
//! The domain layer has no dependencies on the infrastructure or API layers.

pub mod entities;
pub mod repositories;

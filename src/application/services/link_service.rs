//! Shorten and resolve operations.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, generate_code};
use crate::utils::path::extract_code;

/// Fresh codes tried before a shorten request gives up on collisions.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Result of a successful shorten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
}

/// Service for creating and resolving short links.
///
/// Stateless apart from the shared repository handle; each call is
/// independent of every other.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Stores `long_url` under a new random code and builds its short URL.
    ///
    /// # Code Generation
    ///
    /// A [`CODE_LENGTH`]-character code is generated and written with an
    /// insert-if-absent. If the code is already taken a new one is drawn, up
    /// to [`MAX_CODE_ATTEMPTS`] times. Existing records are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if `long_url` is empty.
    ///
    /// Returns [`AppError::StorageFailure`] if the write fails or every
    /// attempt collides. The generated code is discarded.
    pub async fn shorten(&self, long_url: &str, host: &str) -> Result<ShortenedLink, AppError> {
        if long_url.is_empty() {
            return Err(AppError::InvalidRequest);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let link = ShortLink::new(generate_code(CODE_LENGTH), long_url);

            match self.repository.create(&link).await {
                Ok(()) => {
                    debug!("Stored {} -> {}", link.code, link.long_url);
                    return Ok(ShortenedLink {
                        short_url: Self::get_short_url(host, &link.code),
                        code: link.code,
                    });
                }
                Err(StoreError::Conflict { code }) => {
                    debug!("Code collision on {} (attempt {})", code, attempt);
                }
                Err(e) => {
                    error!("Failed to store short link: {}", e);
                    return Err(AppError::StorageFailure);
                }
            }
        }

        error!(
            "Gave up generating a free code after {} attempts",
            MAX_CODE_ATTEMPTS
        );
        Err(AppError::StorageFailure)
    }

    /// Resolves a request path to the stored long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidPath`] if the path is not a single segment.
    ///
    /// Returns [`AppError::NotFound`] if no record exists for the code or the
    /// lookup fails. Callers cannot tell the two apart.
    pub async fn resolve(&self, path: &str) -> Result<String, AppError> {
        let code = extract_code(path)?;

        match self.repository.find_by_code(code).await {
            Ok(Some(link)) => Ok(link.long_url),
            Ok(None) => {
                debug!("No link for code {:?}", code);
                Err(AppError::NotFound)
            }
            Err(e) => {
                warn!("Lookup for code {:?} failed: {}", code, e);
                Err(AppError::NotFound)
            }
        }
    }

    /// Constructs the full short URL from a host and code.
    ///
    /// Always uses HTTPS. The host is taken verbatim from the request.
    pub fn get_short_url(host: &str, code: &str) -> String {
        format!("https://{}/{}", host, code)
    }
}

//! Bearer credential validation.

use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Returns `true` only if `header` is exactly `"Bearer " + expected`.
///
/// The comparison is case-sensitive and byte-exact: a missing header, another
/// scheme, a lowercase `bearer`, extra whitespace or a different token all fail.
/// An empty `expected` never authorizes, so an unset credential cannot be
/// matched by a bare `"Bearer "`.
///
/// SHA-256 digests are compared instead of the raw strings so that timing does
/// not reveal how long a matching prefix was.
pub fn authorize(header: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }

    let presented = Sha256::digest(header.as_bytes());
    let wanted = Sha256::digest(format!("Bearer {expected}").as_bytes());

    presented == wanted
}

/// Service for authenticating API requests via a shared bearer credential.
///
/// Holds the expected token loaded once at startup from `API_AUTH_TOKEN`.
pub struct AuthService {
    expected_token: String,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(expected_token: impl Into<String>) -> Self {
        Self {
            expected_token: expected_token.into(),
        }
    }

    /// Checks the raw `Authorization` header value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the header is absent or does not
    /// match the configured credential.
    pub fn authenticate(&self, header: Option<&str>) -> Result<(), AppError> {
        if authorize(header.unwrap_or_default(), &self.expected_token) {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

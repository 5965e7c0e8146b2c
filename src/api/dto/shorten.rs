//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// The URL itself is not checked beyond being present and non-empty.
/// `URL` and `Url` are accepted as the key too; a body naming the field more
/// than once is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default, alias = "URL", alias = "Url")]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Successful shorten response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
}

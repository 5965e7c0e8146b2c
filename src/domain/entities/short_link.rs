//! Short link entity representing a stored code → URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored mapping from a short code to its target URL.
///
/// Records are written once on shorten and read any number of times on
/// resolve. There is no update, delete or expiry lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Builds a new record stamped with the current time.
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
            created_at: Utc::now(),
        }
    }
}

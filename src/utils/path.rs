//! Short code extraction from request paths.

use crate::error::AppError;

/// Extracts the short code from a resolve path.
///
/// All leading and trailing slashes are stripped, then the remainder must be a
/// single segment. Empty segments between slashes count, so `/a//b` is three
/// segments. An empty remainder yields an empty code, which simply never
/// matches a stored record.
///
/// # Errors
///
/// Returns [`AppError::InvalidPath`] if the trimmed path has more than one
/// segment.
///
/// # Examples
///
/// ```
/// use short_url::utils::path::extract_code;
///
/// assert_eq!(extract_code("/abc123").unwrap(), "abc123");
/// assert_eq!(extract_code("//abc123/").unwrap(), "abc123");
/// assert!(extract_code("/a/b").is_err());
/// ```
pub fn extract_code(path: &str) -> Result<&str, AppError> {
    let trimmed = path.trim_matches('/');

    if trimmed.contains('/') {
        return Err(AppError::InvalidPath);
    }

    Ok(trimmed)
}

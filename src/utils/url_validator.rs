//! Validation of long URLs submitted for shortening.

/// Schemes a redirect target may use.
const ALLOWED_PREFIXES: [&str; 2] = ["http://", "https://"];

pub const MISSING_URL_MESSAGE: &str = "Missing 'long_url' in request body";
pub const INVALID_SCHEME_MESSAGE: &str = "long_url must start with http:// or https://";

/// Errors that can occur while validating a long URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("{}", MISSING_URL_MESSAGE)]
    Empty,

    #[error("{}", INVALID_SCHEME_MESSAGE)]
    UnsupportedScheme,
}

/// Checks that `long_url` is non-empty and starts with `http://` or `https://`.
///
/// The URL is stored verbatim: no normalization is applied.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com/a/b").is_ok());
/// assert!(validate_long_url("ftp://x").is_err());
/// assert!(validate_long_url("").is_err());
/// ```
pub fn validate_long_url(long_url: &str) -> Result<(), UrlValidationError> {
    if long_url.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !ALLOWED_PREFIXES.iter().any(|p| long_url.starts_with(p)) {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    Ok(())
}

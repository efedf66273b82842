//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten one URL.
///
/// The scheme check happens in the allocation engine so that every caller,
/// not just HTTP, gets the same precondition.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        required(message = "Missing 'long_url' in request body"),
        length(min = 1, message = "Missing 'long_url' in request body")
    )]
    pub long_url: Option<String>,
}

/// Response for a successfully allocated short URL.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_long_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_long_url_fails_validation() {
        let request: ShortenRequest = serde_json::from_str(r#"{"long_url": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_present_long_url_passes_validation() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"long_url": "ftp://x"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}

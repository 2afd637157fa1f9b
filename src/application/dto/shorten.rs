//! DTOs for the shorten operation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// A missing `longUrl` deserializes as an empty string so that it is reported
/// through validation like any other malformed value.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_long_url", message = "Must be a valid URL"))]
    pub long_url: String,
}

impl ShortenUrlRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

/// Accepts absolute URLs that have at least a scheme and a host.
///
/// `Url::parse` silently drops tabs and newlines, so control characters are
/// rejected up front; the stored string is later sent verbatim as `Location`.
fn validate_long_url(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_ascii_control()) {
        return Err(ValidationError::new("url"));
    }

    match url::Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(ValidationError::new("url")),
    }
}

/// Response view returned after a successful shorten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}

impl ShortenUrlResponse {
    /// Builds the view for a stored mapping; `base_url` must not end with `/`.
    pub fn from_mapping(mapping: &UrlMapping, base_url: &str) -> Self {
        Self {
            short_code: mapping.short_code().to_string(),
            short_url: format!("{}/{}", base_url, mapping.short_code()),
            long_url: mapping.long_url().to_string(),
        }
    }
}

//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Must be an absolute HTTP(S) URL;
    /// the service performs the authoritative validation.
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Response carrying the composed public short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

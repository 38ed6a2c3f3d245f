//! DTOs for the URL save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL to shorten (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-chosen alias. When absent, a random alias is
    /// generated. An empty alias is rejected.
    #[validate(length(min = 1, max = 64, message = "Alias must be 1-64 characters"))]
    pub alias: Option<String>,
}

/// Response carrying the alias under which the URL was stored.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
}

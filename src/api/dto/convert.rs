//! DTOs for the conversion endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to convert a long maps URL.
///
/// The length cap is a transport-level guard; real place URLs run a few
/// hundred bytes.
#[derive(Debug, Deserialize, Validate)]
pub struct ConvertRequest {
    /// The long-form Google Maps place URL.
    #[validate(length(max = 32768, message = "URL is too long"))]
    pub url: String,
}

/// Successful conversion result.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// The extracted CID as an exact decimal string.
    pub cid: String,
    /// Canonical short URL: `https://maps.google.com/?cid=<cid>`.
    pub short_url: String,
}

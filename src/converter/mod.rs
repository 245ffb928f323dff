//! Extraction of place CIDs from long-form Google Maps URLs.
//!
//! A long place URL embeds a hex identifier pair after the `!1s` marker, e.g.
//! `...data=!3m1!4b1!4m6!3m5!1s0x47d9e301afa19001:0x8e6273dccb2b7b1c...`.
//! The second component is the CID. Rewriting it in decimal as
//! `https://maps.google.com/?cid=<decimal>` yields a short URL the service
//! accepts as equivalent to the original.
//!
//! The conversion is a pure function: no I/O, no shared state, same output
//! for the same input on every call.

pub mod hex;

use std::sync::LazyLock;

use regex::Regex;

use crate::converter::hex::hex_to_decimal;

/// Substring that marks the input as a Google Maps URL.
///
/// This is a coarse textual guard, not a URL parse: any string containing it
/// anywhere passes the gate.
pub const MAPS_URL_MARKER: &str = "google.com/maps";

/// Prefix of the canonical short URL.
pub const SHORT_URL_BASE: &str = "https://maps.google.com/?cid=";

/// Compiled pattern for the embedded hex identifier pair.
///
/// Only the second component (after the colon) encodes the CID.
static CID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!1s0x[0-9a-fA-F]+:0x([0-9a-fA-F]+)").unwrap());

/// Errors that can occur while converting a maps URL.
///
/// All three are expected, recoverable outcomes surfaced as values. The
/// routine never panics on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Please enter a Google Maps URL")]
    EmptyInput,

    #[error("Please enter a valid Google Maps URL")]
    NotAMapsUrl,

    #[error("Could not extract a CID from the URL. Make sure it's a Google Maps place URL")]
    CidNotFound,
}

impl ConvertError {
    /// Stable machine-readable code, suitable for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::EmptyInput => "empty_input",
            ConvertError::NotAMapsUrl => "not_a_maps_url",
            ConvertError::CidNotFound => "cid_not_found",
        }
    }
}

/// A successfully extracted CID and its canonical short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedLink {
    /// The CID as an exact decimal string (no leading zeros, no sign).
    pub cid: String,
    /// `https://maps.google.com/?cid=<cid>`.
    pub short_url: String,
}

/// Converts a long-form Google Maps place URL into a short canonical link.
///
/// # Gates
///
/// Checked in order, each short-circuiting:
///
/// 1. Trimmed input must be non-empty
/// 2. Input must contain [`MAPS_URL_MARKER`]
/// 3. Input must contain an `!1s0x<hex>:0x<hex>` identifier pair; when
///    several are present, the leftmost one wins
///
/// The hex CID is converted to decimal with full precision (values exceed
/// the 64-bit range) and substituted into [`SHORT_URL_BASE`].
///
/// # Errors
///
/// Returns [`ConvertError::EmptyInput`], [`ConvertError::NotAMapsUrl`], or
/// [`ConvertError::CidNotFound`] — never panics, for any input.
///
/// # Examples
///
/// ```
/// use maps_cid_converter::converter::convert_maps_url;
///
/// let url = "https://www.google.com/maps/place/X/@1,2,17z/data=!3m1!1s0x0:0xff";
/// let link = convert_maps_url(url).unwrap();
/// assert_eq!(link.short_url, "https://maps.google.com/?cid=255");
/// ```
pub fn convert_maps_url(raw: &str) -> Result<ConvertedLink, ConvertError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    if !input.contains(MAPS_URL_MARKER) {
        return Err(ConvertError::NotAMapsUrl);
    }

    let captures = CID_PATTERN.captures(input).ok_or(ConvertError::CidNotFound)?;
    let hex_cid = captures.get(1).ok_or(ConvertError::CidNotFound)?.as_str();

    // The pattern only matches hex digits, so this cannot fail in practice;
    // a miss is folded into the same classification as "no match".
    let cid = hex_to_decimal(hex_cid).ok_or(ConvertError::CidNotFound)?;

    let short_url = format!("{SHORT_URL_BASE}{cid}");
    Ok(ConvertedLink { cid, short_url })
}

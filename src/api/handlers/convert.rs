//! Handler for the URL conversion endpoint.

use axum::Json;
use serde_json::json;
use validator::Validate;

use crate::api::dto::convert::{ConvertRequest, ConvertResponse};
use crate::converter::convert_maps_url;
use crate::error::AppError;

/// Converts a long Google Maps place URL into a short canonical link.
///
/// # Endpoint
///
/// `POST /api/convert`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://www.google.com/maps/place/.../data=...!1s0x...:0x8e6273dccb2b7b1c"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "cid": "10259890293242034972",
///   "short_url": "https://maps.google.com/?cid=10259890293242034972"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: request fails DTO validation
/// - **422 Unprocessable Entity**: conversion failed; the error body carries
///   a stable `code` (`empty_input`, `not_a_maps_url`, `cid_not_found`)
pub async fn convert_handler(
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    request
        .validate()
        .map_err(|e| AppError::bad_request("Invalid request", json!({ "errors": e.to_string() })))?;

    let link = convert_maps_url(&request.url)?;
    tracing::debug!(cid = %link.cid, "converted maps URL");

    Ok(Json(ConvertResponse {
        cid: link.cid,
        short_url: link.short_url,
    }))
}

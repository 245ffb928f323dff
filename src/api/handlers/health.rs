//! Handler for health check endpoint.

use axum::{Json, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::converter::convert_maps_url;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Converter**: Runs a known conversion and verifies the expected CID
pub async fn health_handler() -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let converter_check = check_converter();

    let all_healthy = converter_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            converter: converter_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the converter with a probe URL of known CID.
fn check_converter() -> CheckStatus {
    const PROBE: &str = "https://www.google.com/maps/place/Probe/data=!3m1!1s0x0:0xff";

    match convert_maps_url(PROBE) {
        Ok(link) if link.cid == "255" => CheckStatus {
            status: "ok".to_string(),
            message: Some("Probe URL converted".to_string()),
        },
        Ok(link) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Probe produced unexpected CID: {}", link.cid)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Probe conversion failed: {}", e)),
        },
    }
}

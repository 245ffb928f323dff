//! API route configuration.

use crate::api::handlers::convert_handler;
use axum::{Router, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /convert` - Convert a long maps URL into a short `?cid=` link
pub fn routes() -> Router {
    Router::new().route("/convert", post(convert_handler))
}

//! Web page route configuration.

use crate::web::handlers::{convert_form_handler, home_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET  /` - Converter form
/// - `POST /` - Form submit; re-renders the page with result or error
pub fn routes() -> Router {
    Router::new().route("/", get(home_handler).post(convert_form_handler))
}

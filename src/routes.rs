//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Converter form (public)
//! - `POST /`            - Form submit, server-rendered result (public)
//! - `GET  /health`      - Health check with converter self-test (public)
//! - `POST /api/convert` - JSON conversion endpoint (public, rate limited)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::web;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router() -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

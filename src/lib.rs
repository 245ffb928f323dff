//! # Maps CID Converter
//!
//! A small web service that rewrites long Google Maps place URLs into short
//! canonical links of the form `https://maps.google.com/?cid=<decimal>`.
//!
//! ## Architecture
//!
//! - **Converter** ([`converter`]) - The pure extraction/conversion core
//! - **API Layer** ([`api`]) - JSON endpoint, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered converter form
//!
//! The core is a single referentially transparent function with no I/O and
//! no shared state; the HTTP layers are thin hosts around it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="text"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod converter;
pub mod error;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::converter::{ConvertError, ConvertedLink, convert_maps_url};
    pub use crate::error::AppError;
}

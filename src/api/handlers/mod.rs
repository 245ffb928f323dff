//! HTTP request handlers for API endpoints.

pub mod convert;
pub mod health;

pub use convert::convert_handler;
pub use health::health_handler;

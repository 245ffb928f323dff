//! Web layer for the browser-based converter form.
//!
//! Serves the converter page and renders conversion results server-side.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;

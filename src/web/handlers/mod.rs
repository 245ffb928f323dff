//! HTML template rendering handlers for the converter pages.

mod home;

pub use home::{convert_form_handler, home_handler};

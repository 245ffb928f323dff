//! Converter form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use serde::Deserialize;

use crate::converter::{ConvertedLink, convert_maps_url};

/// Template for the converter page.
///
/// Renders `templates/home.html` with:
/// - The input form (pre-filled with the last submitted URL)
/// - On success, the short link with copy and open actions
/// - On failure, the error message
#[derive(Template, WebTemplate, Default)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub input_url: String,
    pub link: Option<ConvertedLink>,
    pub error: Option<String>,
}

/// Form payload for a conversion request.
#[derive(Debug, Deserialize)]
pub struct ConvertForm {
    pub url: String,
}

/// Renders the empty converter form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate::default()
}

/// Handles a form submit and re-renders the page with the outcome.
///
/// Conversion failures are rendered inline as the error line; they are not
/// HTTP errors.
///
/// # Endpoint
///
/// `POST /`
pub async fn convert_form_handler(Form(form): Form<ConvertForm>) -> impl IntoResponse {
    match convert_maps_url(&form.url) {
        Ok(link) => {
            tracing::debug!(cid = %link.cid, "converted maps URL via form");
            HomeTemplate {
                input_url: form.url,
                link: Some(link),
                error: None,
            }
        }
        Err(e) => HomeTemplate {
            input_url: form.url,
            link: None,
            error: Some(e.to_string()),
        },
    }
}

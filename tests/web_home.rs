use axum_test::TestServer;
use maps_cid_converter::web::routes::routes;
use serde_json::json;

const PLACE_URL: &str = "https://www.google.com/maps/place/A+New+Leaf+Norfolk/@52.6434402,1.3488311,17z/data=!3m1!4b1!4m6!3m5!1s0x47d9e301afa19001:0x8e6273dccb2b7b1c";

fn test_server() -> TestServer {
    TestServer::new(routes()).unwrap()
}

#[tokio::test]
async fn test_home_page_renders_form() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Long Google Maps URL"));
    assert!(body.contains("<textarea"));
}

#[tokio::test]
async fn test_form_submit_success() {
    let server = test_server();

    let response = server.post("/").form(&json!({ "url": PLACE_URL })).await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("https://maps.google.com/?cid=10259890293242034972"));
    assert!(body.contains("Copy"));
}

#[tokio::test]
async fn test_form_submit_error_rendered_inline() {
    let server = test_server();

    let response = server
        .post("/")
        .form(&json!({ "url": "https://example.com/foo" }))
        .await;

    // Form failures are rendered in the page, not returned as HTTP errors.
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Please enter a valid Google Maps URL"));
    assert!(!body.contains("maps.google.com/?cid="));
}

#[tokio::test]
async fn test_form_preserves_input_on_error() {
    let server = test_server();

    let response = server
        .post("/")
        .form(&json!({ "url": "https://example.com/keep-me" }))
        .await;

    assert!(response.text().contains("https://example.com/keep-me"));
}

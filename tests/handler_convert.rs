use axum::http::StatusCode;
use axum::{Router, routing::post};
use axum_test::TestServer;
use maps_cid_converter::api::handlers::convert_handler;
use serde_json::json;

const PLACE_URL: &str = "https://www.google.com/maps/place/A+New+Leaf+Norfolk/@52.6434402,1.3488311,17z/data=!3m1!4b1!4m6!3m5!1s0x47d9e301afa19001:0x8e6273dccb2b7b1c";

fn test_server() -> TestServer {
    let app = Router::new().route("/api/convert", post(convert_handler));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_convert_success() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": PLACE_URL }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["cid"], "10259890293242034972");
    assert_eq!(
        json["short_url"],
        "https://maps.google.com/?cid=10259890293242034972"
    );
}

#[tokio::test]
async fn test_convert_zero_cid() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": "https://www.google.com/maps/place/X/data=!1s0x0:0x0" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["cid"], "0");
    assert_eq!(json["short_url"], "https://maps.google.com/?cid=0");
}

#[tokio::test]
async fn test_convert_uppercase_hex() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": "https://www.google.com/maps/place/X/data=!1s0xAB:0xFF" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["cid"], "255");
}

#[tokio::test]
async fn test_convert_empty_input() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "empty_input");
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn test_convert_not_a_maps_url() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": "https://example.com/foo" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_a_maps_url"
    );
}

#[tokio::test]
async fn test_convert_cid_not_found() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": "https://www.google.com/maps/place/X/@1,2,3z" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "cid_not_found"
    );
}

#[tokio::test]
async fn test_convert_leftmost_match() {
    let server = test_server();

    let response = server
        .post("/api/convert")
        .json(&json!({ "url": "https://www.google.com/maps/search/!1s0x1:0xa!1s0x2:0xb" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["cid"], "10");
}

#[tokio::test]
async fn test_convert_url_too_long() {
    let server = test_server();

    let url = format!("https://google.com/maps/{}", "a".repeat(40_000));
    let response = server.post("/api/convert").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

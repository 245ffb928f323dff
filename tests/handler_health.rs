use axum::{Router, routing::get};
use axum_test::TestServer;
use maps_cid_converter::api::handlers::health_handler;

#[tokio::test]
async fn test_health_ok() {
    let app = Router::new().route("/health", get(health_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["converter"]["status"], "ok");
}

mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use employee_directory::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _repo, _cache) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "In-memory store");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_cache_occupancy() {
    let (state, repo, _cache) = common::create_test_state();
    let employee = common::seed_employee(&repo, "John Doe", 10000, "IT").await;
    state.employee_service.get_by_id(employee.id).await.unwrap();
    state.employee_service.list_all().await.unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(
        json["checks"]["cache"]["message"],
        "In-memory, 1 entries, collection cached"
    );
}

#[tokio::test]
async fn test_health_is_public() {
    let (state, _repo, _cache) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("cache").is_some());
}

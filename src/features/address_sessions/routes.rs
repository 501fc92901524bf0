use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::address_sessions::handlers;
use crate::features::address_sessions::services::AddressSessionService;

/// Create routes for the address sessions feature
pub fn routes(service: Arc<AddressSessionService>) -> Router {
    Router::new()
        .route("/api/address-sessions", post(handlers::create_session))
        .route(
            "/api/address-sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route(
            "/api/address-sessions/{id}/selection",
            put(handlers::select_region),
        )
        .route(
            "/api/address-sessions/{id}/levels/{level}/retry",
            post(handlers::retry_level),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::postal_codes::services::PostalCodeResolver;
    use crate::shared::test_helpers::{StaticPostalSource, StaticRegionSource};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn server() -> TestServer {
        let service = Arc::new(AddressSessionService::new(
            Arc::new(StaticRegionSource::jakarta_selatan()),
            Arc::new(PostalCodeResolver::new(Arc::new(
                StaticPostalSource::default(),
            ))),
        ));
        TestServer::new(routes(service)).unwrap()
    }

    async fn create(server: &TestServer) -> String {
        let response = server.post("/api/address-sessions").await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        body["data"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_returns_snapshot() {
        let server = server();

        let response = server.post("/api/address-sessions").await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let levels = body["data"]["levels"].as_array().unwrap();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[0]["level"], "province");
        assert_eq!(levels[0]["status"], "loading");
        assert_eq!(levels[3]["status"], "idle");
        assert_eq!(body["data"]["postal"]["status"], "idle");
    }

    #[tokio::test]
    async fn test_select_schedules_child_list() {
        let server = server();
        let id = create(&server).await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        let response = server
            .put(&format!("/api/address-sessions/{}/selection", id))
            .json(&json!({ "level": "province", "regionId": "31" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["selection"]["province"], "31");
        assert_eq!(body["data"]["levels"][1]["status"], "loading");
        assert_eq!(body["data"]["levels"][1]["parentId"], "31");

        tokio::time::sleep(Duration::from_millis(20)).await;
        let body: Value = server
            .get(&format!("/api/address-sessions/{}", id))
            .await
            .json();
        assert_eq!(body["data"]["levels"][1]["status"], "ready");
        assert_eq!(body["data"]["levels"][1]["regions"][0]["name"], "KOTA JAKARTA SELATAN");
    }

    #[tokio::test]
    async fn test_select_without_parent_is_conflict() {
        let server = server();
        let id = create(&server).await;

        let response = server
            .put(&format!("/api/address-sessions/{}/selection", id))
            .json(&json!({ "level": "village", "regionId": "3171070005" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_select_accepts_city_level_name() {
        let server = server();
        let id = create(&server).await;
        server
            .put(&format!("/api/address-sessions/{}/selection", id))
            .json(&json!({ "level": "province", "regionId": "31" }))
            .await
            .assert_status_ok();

        let response = server
            .put(&format!("/api/address-sessions/{}/selection", id))
            .json(&json!({ "level": "city", "regionId": "3171" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["selection"]["regency"], "3171");
        assert_eq!(body["data"]["levels"][2]["parentId"], "3171");
    }

    #[tokio::test]
    async fn test_select_with_unknown_level_is_bad_request() {
        let server = server();
        let id = create(&server).await;

        let response = server
            .put(&format!("/api/address-sessions/{}/selection", id))
            .json(&json!({ "level": "hamlet", "regionId": "1" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON data"));
    }

    #[tokio::test]
    async fn test_retry_requires_failed_level() {
        let server = server();
        let id = create(&server).await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        let response = server
            .post(&format!("/api/address-sessions/{}/levels/province/retry", id))
            .await;
        response.assert_status(StatusCode::CONFLICT);

        let response = server
            .post(&format!("/api/address-sessions/{}/levels/hamlet/retry", id))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let server = server();
        let id = create(&server).await;

        server
            .delete(&format!("/api/address-sessions/{}", id))
            .await
            .assert_status_ok();

        server
            .get(&format!("/api/address-sessions/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

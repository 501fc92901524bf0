use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route(
            "/api/regions/provinces/{id}/regencies",
            get(handlers::list_regencies_by_province),
        )
        .route(
            "/api/regions/regencies/{id}/districts",
            get(handlers::list_districts_by_regency),
        )
        .route(
            "/api/regions/districts/{id}/villages",
            get(handlers::list_villages_by_district),
        )
        .with_state(service)
}

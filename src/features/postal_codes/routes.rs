use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::postal_codes::handlers;
use crate::features::postal_codes::services::PostalCodeResolver;

/// Create routes for the postal codes feature
pub fn routes(resolver: Arc<PostalCodeResolver>) -> Router {
    Router::new()
        .route("/api/postal-codes", get(handlers::lookup_postal_codes))
        .with_state(resolver)
}

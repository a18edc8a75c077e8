use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::airports::{handlers, services::AirportService};

/// Create routes for the airports feature
pub fn routes(service: Arc<AirportService>) -> Router {
    Router::new()
        .route(
            "/airports/",
            get(handlers::list_airports).post(handlers::create_airport),
        )
        .route(
            "/airports",
            get(handlers::list_airports).post(handlers::create_airport),
        )
        .route(
            "/airports/{id}",
            get(handlers::get_airport)
                .put(handlers::update_airport)
                .delete(handlers::delete_airport),
        )
        .with_state(service)
}

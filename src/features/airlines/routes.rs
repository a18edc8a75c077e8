use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::airlines::{handlers, services::AirlineService};

/// Create routes for the airlines feature
pub fn routes(service: Arc<AirlineService>) -> Router {
    Router::new()
        .route(
            "/airlines/",
            get(handlers::list_airlines).post(handlers::create_airline),
        )
        .route(
            "/airlines",
            get(handlers::list_airlines).post(handlers::create_airline),
        )
        .route(
            "/airlines/{id}",
            get(handlers::get_airline)
                .put(handlers::update_airline)
                .delete(handlers::delete_airline),
        )
        .with_state(service)
}

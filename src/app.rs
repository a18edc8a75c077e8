use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::database::Repositories;
use crate::core::middleware;
use crate::features::airlines::{routes as airlines_routes, AirlineService};
use crate::features::airports::{routes as airports_routes, AirportService};
use crate::features::ui::{routes as ui_routes, UiState};

/// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Builds every API and HTML route over the given persistence context.
pub fn router(repos: Repositories) -> Router {
    let airport_service = Arc::new(AirportService::new(repos.clone()));
    tracing::info!("Airport service initialized");

    let airline_service = Arc::new(AirlineService::new(repos));
    tracing::info!("Airline service initialized");

    let ui_state = UiState {
        airports: Arc::clone(&airport_service),
        airlines: Arc::clone(&airline_service),
    };

    Router::new()
        .merge(airports_routes::routes(airport_service))
        .merge(airlines_routes::routes(airline_service))
        .merge(ui_routes::routes(ui_state))
        .route("/health", get(health_check))
}

/// Wraps the router in CORS, request-id and tracing layers.
pub fn with_layers(router: Router, cors_allowed_origins: Vec<String>) -> Router {
    // Layers listed top to bottom run outermost first: the request id is
    // assigned before the trace span is made and copied onto the response.
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(middleware::MakeSpanWithRequestId)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(middleware::cors_layer(cors_allowed_origins)),
    )
}

use axum::{routing::get, Router};

use crate::features::ui::{handlers, UiState};

/// Create routes for the HTML pages
pub fn routes(state: UiState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/airlines_ui", get(handlers::list_airlines_page))
        .route("/airports_ui", get(handlers::list_airports_page))
        .with_state(state)
}

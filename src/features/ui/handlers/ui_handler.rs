use axum::{extract::State, response::Html};
use minijinja::context;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::airlines::AirlineService;
use crate::features::airports::AirportService;
use crate::shared::templates::render_template;

#[derive(Clone)]
pub struct UiState {
    pub airports: Arc<AirportService>,
    pub airlines: Arc<AirlineService>,
}

/// Index page linking to the listings
pub async fn index() -> Result<Html<String>> {
    let html = render_template("index.html", context! {})?;
    Ok(Html(html))
}

/// Table of all airlines
pub async fn list_airlines_page(State(state): State<UiState>) -> Result<Html<String>> {
    let airlines = state.airlines.list_all().await?;
    let html = render_template("airline_list.html", context! { airlines })?;
    Ok(Html(html))
}

/// Table of all airports
pub async fn list_airports_page(State(state): State<UiState>) -> Result<Html<String>> {
    let airports = state.airports.list_all().await?;
    let html = render_template("airport_list.html", context! { airports })?;
    Ok(Html(html))
}

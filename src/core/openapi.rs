use utoipa::{Modify, OpenApi};

use crate::features::airlines::{dtos as airlines_dtos, handlers as airlines_handlers};
use crate::features::airports::{dtos as airports_dtos, handlers as airports_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Airports
        airports_handlers::create_airport,
        airports_handlers::get_airport,
        airports_handlers::list_airports,
        airports_handlers::update_airport,
        airports_handlers::delete_airport,
        // Airlines
        airlines_handlers::create_airline,
        airlines_handlers::get_airline,
        airlines_handlers::list_airlines,
        airlines_handlers::update_airline,
        airlines_handlers::delete_airline,
    ),
    components(
        schemas(
            // Airports
            airports_dtos::CreateAirportDto,
            airports_dtos::UpdateAirportDto,
            airports_dtos::AirportResponseDto,
            // Airlines
            airlines_dtos::CreateAirlineDto,
            airlines_dtos::UpdateAirlineDto,
            airlines_dtos::AirlineResponseDto,
        )
    ),
    tags(
        (name = "airports", description = "Airports that airlines can be based at"),
        (name = "airlines", description = "Airlines and their base airport"),
    ),
    info(
        title = "Airport Registry API",
        version = "0.1.0",
        description = "Airports, airlines and their base airport links",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

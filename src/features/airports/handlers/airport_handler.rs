use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::airports::dtos::{AirportResponseDto, CreateAirportDto, UpdateAirportDto};
use crate::features::airports::services::AirportService;
use crate::shared::types::ListQuery;

/// Register a new airport
#[utoipa::path(
    post,
    path = "/airports/",
    request_body = CreateAirportDto,
    responses(
        (status = 201, description = "Airport created", body = AirportResponseDto),
        (status = 400, description = "Validation error or name already taken")
    ),
    tag = "airports"
)]
pub async fn create_airport(
    State(service): State<Arc<AirportService>>,
    AppJson(dto): AppJson<CreateAirportDto>,
) -> Result<(StatusCode, Json<AirportResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let airport = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(airport)))
}

/// Get an airport by ID
#[utoipa::path(
    get,
    path = "/airports/{id}",
    params(
        ("id" = i32, Path, description = "Airport ID")
    ),
    responses(
        (status = 200, description = "Airport found", body = AirportResponseDto),
        (status = 404, description = "Airport not found")
    ),
    tag = "airports"
)]
pub async fn get_airport(
    State(service): State<Arc<AirportService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<AirportResponseDto>> {
    let airport = service.get_by_id(id).await?;
    Ok(Json(airport))
}

/// List airports
#[utoipa::path(
    get,
    path = "/airports/",
    params(ListQuery),
    responses(
        (status = 200, description = "Airports ordered by id", body = Vec<AirportResponseDto>)
    ),
    tag = "airports"
)]
pub async fn list_airports(
    State(service): State<Arc<AirportService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<Vec<AirportResponseDto>>> {
    let airports = service.list(&query).await?;
    Ok(Json(airports))
}

/// Partially update an airport
#[utoipa::path(
    put,
    path = "/airports/{id}",
    params(
        ("id" = i32, Path, description = "Airport ID")
    ),
    request_body = UpdateAirportDto,
    responses(
        (status = 200, description = "Airport updated", body = AirportResponseDto),
        (status = 400, description = "Validation error or name already taken"),
        (status = 404, description = "Airport not found")
    ),
    tag = "airports"
)]
pub async fn update_airport(
    State(service): State<Arc<AirportService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateAirportDto>,
) -> Result<Json<AirportResponseDto>> {
    let changes = dto.into_changes()?;

    let airport = service.update(id, changes).await?;
    Ok(Json(airport))
}

/// Delete an airport that is not the base of any airline
#[utoipa::path(
    delete,
    path = "/airports/{id}",
    params(
        ("id" = i32, Path, description = "Airport ID")
    ),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 400, description = "Airport is the base of one or more airlines"),
        (status = 404, description = "Airport not found")
    ),
    tag = "airports"
)]
pub async fn delete_airport(
    State(service): State<Arc<AirportService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

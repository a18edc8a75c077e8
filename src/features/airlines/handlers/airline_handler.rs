use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::airlines::dtos::{AirlineResponseDto, CreateAirlineDto, UpdateAirlineDto};
use crate::features::airlines::services::AirlineService;
use crate::shared::types::ListQuery;

/// Register a new airline
///
/// The base airport must already exist.
#[utoipa::path(
    post,
    path = "/airlines/",
    request_body = CreateAirlineDto,
    responses(
        (status = 201, description = "Airline created", body = AirlineResponseDto),
        (status = 400, description = "Validation error, unknown base airport or code already taken")
    ),
    tag = "airlines"
)]
pub async fn create_airline(
    State(service): State<Arc<AirlineService>>,
    AppJson(dto): AppJson<CreateAirlineDto>,
) -> Result<(StatusCode, Json<AirlineResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let airline = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(airline)))
}

#[utoipa::path(
    get,
    path = "/airlines/{id}",
    params(
        ("id" = i32, Path, description = "Airline ID")
    ),
    responses(
        (status = 200, description = "Airline found", body = AirlineResponseDto),
        (status = 404, description = "Airline not found")
    ),
    tag = "airlines"
)]
pub async fn get_airline(
    State(service): State<Arc<AirlineService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<AirlineResponseDto>> {
    let airline = service.get_by_id(id).await?;
    Ok(Json(airline))
}

#[utoipa::path(
    get,
    path = "/airlines/",
    params(ListQuery),
    responses(
        (status = 200, description = "Airlines ordered by id", body = Vec<AirlineResponseDto>)
    ),
    tag = "airlines"
)]
pub async fn list_airlines(
    State(service): State<Arc<AirlineService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<Vec<AirlineResponseDto>>> {
    let airlines = service.list(&query).await?;
    Ok(Json(airlines))
}

/// Partially update an airline
#[utoipa::path(
    put,
    path = "/airlines/{id}",
    params(
        ("id" = i32, Path, description = "Airline ID")
    ),
    request_body = UpdateAirlineDto,
    responses(
        (status = 200, description = "Airline updated", body = AirlineResponseDto),
        (status = 400, description = "Validation error, unknown base airport or code already taken"),
        (status = 404, description = "Airline not found")
    ),
    tag = "airlines"
)]
pub async fn update_airline(
    State(service): State<Arc<AirlineService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateAirlineDto>,
) -> Result<Json<AirlineResponseDto>> {
    let changes = dto.into_changes()?;

    let airline = service.update(id, changes).await?;
    Ok(Json(airline))
}

#[utoipa::path(
    delete,
    path = "/airlines/{id}",
    params(
        ("id" = i32, Path, description = "Airline ID")
    ),
    responses(
        (status = 204, description = "Airline deleted"),
        (status = 404, description = "Airline not found")
    ),
    tag = "airlines"
)]
pub async fn delete_airline(
    State(service): State<Arc<AirlineService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::airports::models::{Airport, AirportChanges, NewAirport};
use crate::shared::types::Patch;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAirportDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Airport name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0, message = "Runway count must be non-negative"))]
    pub runway_count: i32,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: i32,
}

impl From<CreateAirportDto> for NewAirport {
    fn from(dto: CreateAirportDto) -> Self {
        Self {
            name: dto.name,
            runway_count: dto.runway_count,
            capacity: dto.capacity,
        }
    }
}

/// Update request; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAirportDto {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub runway_count: Patch<i32>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub capacity: Patch<i32>,
}

impl UpdateAirportDto {
    /// Resolves the patch fields and validates the ones that are present
    pub fn into_changes(self) -> Result<AirportChanges> {
        let changes = AirportChanges {
            name: self.name.into_required("name")?,
            runway_count: self.runway_count.into_required("runway_count")?,
            capacity: self.capacity.into_required("capacity")?,
        };

        changes
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(changes)
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirportResponseDto {
    pub id: i32,
    pub name: String,
    pub runway_count: i32,
    pub capacity: i32,
    pub is_actual: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Airport> for AirportResponseDto {
    fn from(a: Airport) -> Self {
        Self {
            id: a.id,
            name: a.name,
            runway_count: a.runway_count,
            capacity: a.capacity,
            is_actual: a.is_actual,
            updated_at: a.updated_at,
        }
    }
}

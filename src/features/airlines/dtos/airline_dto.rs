use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::airlines::models::{Airline, AirlineChanges, NewAirline};
use crate::shared::types::Patch;
use crate::shared::validation::AIRLINE_CODE_REGEX;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAirlineDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Airline name must be between 1 and 255 characters"
    ))]
    pub name: String,

    /// Two uppercase letters, e.g. "DL"
    #[validate(regex(
        path = *AIRLINE_CODE_REGEX,
        message = "Airline code must be a two-letter uppercase code"
    ))]
    pub code: String,

    /// Name of an existing airport
    #[validate(length(
        min = 1,
        max = 255,
        message = "Base airport name must be between 1 and 255 characters"
    ))]
    pub base_airport_name: String,

    #[validate(range(min = 1, message = "Employee count must be positive"))]
    pub employee_count: i32,
}

impl From<CreateAirlineDto> for NewAirline {
    fn from(dto: CreateAirlineDto) -> Self {
        Self {
            name: dto.name,
            code: dto.code,
            base_airport_name: dto.base_airport_name,
            employee_count: dto.employee_count,
        }
    }
}

/// Update request; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAirlineDto {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub code: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub base_airport_name: Patch<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub employee_count: Patch<i32>,
}

impl UpdateAirlineDto {
    /// Resolves the patch fields and validates the ones that are present
    pub fn into_changes(self) -> Result<AirlineChanges> {
        let changes = AirlineChanges {
            name: self.name.into_required("name")?,
            code: self.code.into_required("code")?,
            base_airport_name: self.base_airport_name.into_required("base_airport_name")?,
            employee_count: self.employee_count.into_required("employee_count")?,
        };

        changes
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(changes)
    }
}

// Response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AirlineResponseDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub base_airport_name: String,
    pub employee_count: i32,
    pub is_actual: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Airline> for AirlineResponseDto {
    fn from(a: Airline) -> Self {
        Self {
            id: a.id,
            name: a.name,
            code: a.code,
            base_airport_name: a.base_airport_name,
            employee_count: a.employee_count,
            is_actual: a.is_actual,
            updated_at: a.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta() -> CreateAirlineDto {
        CreateAirlineDto {
            name: "Delta".to_string(),
            code: "DL".to_string(),
            base_airport_name: "JFK".to_string(),
            employee_count: 50,
        }
    }

    #[test]
    fn test_create_accepts_valid_airline() {
        assert!(delta().validate().is_ok());
    }

    #[test]
    fn test_create_rejects_bad_codes() {
        for code in ["dl", "Dl", "D", "DLT", "D1", "12", " D", ""] {
            let dto = CreateAirlineDto {
                code: code.to_string(),
                ..delta()
            };
            assert!(dto.validate().is_err(), "{:?} should be rejected", code);
        }
    }

    #[test]
    fn test_create_rejects_non_positive_employee_count() {
        for employee_count in [0, -10] {
            let dto = CreateAirlineDto {
                employee_count,
                ..delta()
            };
            let err = dto.validate().unwrap_err().to_string();
            assert!(err.contains("Employee count must be positive"));
        }
    }

    #[test]
    fn test_update_only_present_fields() {
        let dto: UpdateAirlineDto = serde_json::from_str(r#"{"code": "AA"}"#).unwrap();
        let changes = dto.into_changes().unwrap();

        assert_eq!(changes.code.as_deref(), Some("AA"));
        assert!(changes.name.is_none());
        assert!(changes.base_airport_name.is_none());
        assert!(changes.employee_count.is_none());
    }

    #[test]
    fn test_update_rejects_null_and_invalid_values() {
        let dto: UpdateAirlineDto = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert!(matches!(dto.into_changes(), Err(AppError::Validation(_))));

        let dto: UpdateAirlineDto = serde_json::from_str(r#"{"code": "aa"}"#).unwrap();
        assert!(matches!(dto.into_changes(), Err(AppError::Validation(_))));

        let dto: UpdateAirlineDto = serde_json::from_str(r#"{"employee_count": 0}"#).unwrap();
        assert!(matches!(dto.into_changes(), Err(AppError::Validation(_))));
    }
}

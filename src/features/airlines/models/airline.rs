use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::shared::validation::AIRLINE_CODE_REGEX;

/// Database model for airline
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Airline {
    pub id: i32,
    pub name: String,
    pub code: String,
    /// Name of the airport the airline operates from
    pub base_airport_name: String,
    pub employee_count: i32,
    pub is_actual: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAirline {
    pub name: String,
    pub code: String,
    pub base_airport_name: String,
    pub employee_count: i32,
}

/// Resolved partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Validate)]
pub struct AirlineChanges {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Airline name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,

    #[validate(regex(
        path = *AIRLINE_CODE_REGEX,
        message = "Airline code must be a two-letter uppercase code"
    ))]
    pub code: Option<String>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Base airport name must be between 1 and 255 characters"
    ))]
    pub base_airport_name: Option<String>,

    #[validate(range(min = 1, message = "Employee count must be positive"))]
    pub employee_count: Option<i32>,
}

#[cfg(test)]
impl AirlineChanges {
    pub fn apply_to(&self, airline: &mut Airline) {
        if let Some(ref name) = self.name {
            airline.name = name.clone();
        }
        if let Some(ref code) = self.code {
            airline.code = code.clone();
        }
        if let Some(ref base) = self.base_airport_name {
            airline.base_airport_name = base.clone();
        }
        if let Some(employee_count) = self.employee_count {
            airline.employee_count = employee_count;
        }
        airline.updated_at = Utc::now();
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Database model for airport
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Airport {
    pub id: i32,
    pub name: String,
    pub runway_count: i32,
    pub capacity: i32,
    pub is_actual: bool,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when registering an airport
#[derive(Debug, Clone)]
pub struct NewAirport {
    pub name: String,
    pub runway_count: i32,
    pub capacity: i32,
}

/// Resolved partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Validate)]
pub struct AirportChanges {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Airport name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Runway count must be non-negative"))]
    pub runway_count: Option<i32>,

    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: Option<i32>,
}

#[cfg(test)]
impl AirportChanges {
    /// Applies the changes to an in-memory record
    pub fn apply_to(&self, airport: &mut Airport) {
        if let Some(ref name) = self.name {
            airport.name = name.clone();
        }
        if let Some(runway_count) = self.runway_count {
            airport.runway_count = runway_count;
        }
        if let Some(capacity) = self.capacity {
            airport.capacity = capacity;
        }
        airport.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_not_validated() {
        assert!(AirportChanges::default().validate().is_ok());
    }

    #[test]
    fn test_present_fields_use_create_rules() {
        let changes = AirportChanges {
            runway_count: Some(-1),
            ..Default::default()
        };
        assert!(changes.validate().is_err());

        let changes = AirportChanges {
            capacity: Some(0),
            ..Default::default()
        };
        assert!(changes.validate().is_err());

        let changes = AirportChanges {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(changes.validate().is_err());

        let changes = AirportChanges {
            runway_count: Some(0),
            capacity: Some(1),
            name: Some("LED".to_string()),
        };
        assert!(changes.validate().is_ok());
    }

    #[test]
    fn test_apply_to_keeps_unset_fields() {
        let before = Utc::now() - chrono::Duration::hours(1);
        let mut airport = Airport {
            id: 1,
            name: "JFK".to_string(),
            runway_count: 4,
            capacity: 100,
            is_actual: true,
            updated_at: before,
        };

        AirportChanges {
            capacity: Some(120),
            ..Default::default()
        }
        .apply_to(&mut airport);

        assert_eq!(airport.name, "JFK");
        assert_eq!(airport.runway_count, 4);
        assert_eq!(airport.capacity, 120);
        assert!(airport.updated_at > before);
    }
}

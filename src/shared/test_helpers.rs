//! In-memory storage and fixtures for tests.
//!
//! [`InMemoryStore`] enforces the same constraints as the Postgres schema
//! (unique airport names and airline codes, the base airport foreign key
//! with `ON UPDATE CASCADE` and `ON DELETE RESTRICT`).

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use fake::Fake;
use std::sync::{Arc, Mutex};

use crate::app;
use crate::core::database::Repositories;
use crate::core::error::{AppError, Result};
use crate::features::airlines::dtos::CreateAirlineDto;
use crate::features::airlines::models::{Airline, AirlineChanges, NewAirline};
use crate::features::airlines::repositories::AirlineRepository;
use crate::features::airports::dtos::CreateAirportDto;
use crate::features::airports::models::{Airport, AirportChanges, NewAirport};
use crate::features::airports::repositories::AirportRepository;

#[derive(Default)]
struct MemoryState {
    airports: Vec<Airport>,
    airlines: Vec<Airline>,
    last_airport_id: i32,
    last_airline_id: i32,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

impl InMemoryStore {
    fn state(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }
}

fn page<T: Clone>(rows: &[T], offset: i64, limit: i64) -> Vec<T> {
    rows.iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl AirportRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Airport>> {
        Ok(self.state().airports.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Airport>> {
        Ok(self
            .state()
            .airports
            .iter()
            .find(|a| a.name == name)
            .cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Airport>> {
        Ok(page(&self.state().airports, offset, limit))
    }

    async fn list_all(&self) -> Result<Vec<Airport>> {
        Ok(self.state().airports.clone())
    }

    async fn insert(&self, airport: NewAirport) -> Result<Airport> {
        let mut state = self.state();
        if state.airports.iter().any(|a| a.name == airport.name) {
            return Err(AppError::Conflict("duplicate airport name".to_string()));
        }

        state.last_airport_id += 1;
        let row = Airport {
            id: state.last_airport_id,
            name: airport.name,
            runway_count: airport.runway_count,
            capacity: airport.capacity,
            is_actual: true,
            updated_at: Utc::now(),
        };
        state.airports.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, changes: AirportChanges) -> Result<Option<Airport>> {
        let mut state = self.state();
        let Some(index) = state.airports.iter().position(|a| a.id == id) else {
            return Ok(None);
        };

        let old_name = state.airports[index].name.clone();
        if let Some(ref name) = changes.name {
            if state.airports.iter().any(|a| a.id != id && &a.name == name) {
                return Err(AppError::Conflict("duplicate airport name".to_string()));
            }
            for airline in state
                .airlines
                .iter_mut()
                .filter(|l| l.base_airport_name == old_name)
            {
                airline.base_airport_name = name.clone();
            }
        }

        changes.apply_to(&mut state.airports[index]);
        Ok(Some(state.airports[index].clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state();
        let Some(index) = state.airports.iter().position(|a| a.id == id) else {
            return Ok(false);
        };

        let name = &state.airports[index].name;
        if state.airlines.iter().any(|l| &l.base_airport_name == name) {
            return Err(AppError::Referential("airport still referenced".to_string()));
        }

        state.airports.remove(index);
        Ok(true)
    }
}

#[async_trait]
impl AirlineRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Airline>> {
        Ok(self.state().airlines.iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Airline>> {
        Ok(self
            .state()
            .airlines
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }

    async fn find_by_base_airport(&self, airport_name: &str) -> Result<Vec<Airline>> {
        Ok(self
            .state()
            .airlines
            .iter()
            .filter(|l| l.base_airport_name == airport_name)
            .cloned()
            .collect())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Airline>> {
        Ok(page(&self.state().airlines, offset, limit))
    }

    async fn list_all(&self) -> Result<Vec<Airline>> {
        Ok(self.state().airlines.clone())
    }

    async fn insert(&self, airline: NewAirline) -> Result<Airline> {
        let mut state = self.state();
        if state.airlines.iter().any(|l| l.code == airline.code) {
            return Err(AppError::Conflict("duplicate airline code".to_string()));
        }
        if !state
            .airports
            .iter()
            .any(|a| a.name == airline.base_airport_name)
        {
            return Err(AppError::Referential("unknown base airport".to_string()));
        }

        state.last_airline_id += 1;
        let row = Airline {
            id: state.last_airline_id,
            name: airline.name,
            code: airline.code,
            base_airport_name: airline.base_airport_name,
            employee_count: airline.employee_count,
            is_actual: true,
            updated_at: Utc::now(),
        };
        state.airlines.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, changes: AirlineChanges) -> Result<Option<Airline>> {
        let mut state = self.state();
        let Some(index) = state.airlines.iter().position(|l| l.id == id) else {
            return Ok(None);
        };

        if let Some(ref code) = changes.code {
            if state.airlines.iter().any(|l| l.id != id && &l.code == code) {
                return Err(AppError::Conflict("duplicate airline code".to_string()));
            }
        }
        if let Some(ref base) = changes.base_airport_name {
            if !state.airports.iter().any(|a| &a.name == base) {
                return Err(AppError::Referential("unknown base airport".to_string()));
            }
        }

        changes.apply_to(&mut state.airlines[index]);
        Ok(Some(state.airlines[index].clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut state = self.state();
        let before = state.airlines.len();
        state.airlines.retain(|l| l.id != id);
        Ok(state.airlines.len() < before)
    }
}

/// Persistence context backed by a fresh in-memory store
pub fn memory_repositories() -> Repositories {
    let store = Arc::new(InMemoryStore::default());
    Repositories {
        airports: store.clone(),
        airlines: store,
    }
}

/// The full application router over a fresh in-memory store
pub fn test_app() -> Router {
    app::router(memory_repositories())
}

pub fn airport_dto(name: &str) -> CreateAirportDto {
    CreateAirportDto {
        name: name.to_string(),
        runway_count: (0..8i32).fake(),
        capacity: (1..500i32).fake(),
    }
}

pub fn airline_dto(name: &str, code: &str, base_airport_name: &str) -> CreateAirlineDto {
    CreateAirlineDto {
        name: name.to_string(),
        code: code.to_string(),
        base_airport_name: base_airport_name.to_string(),
        employee_count: (1..20_000i32).fake(),
    }
}

use crate::core::database::Repositories;
use crate::core::error::{AppError, Result};
use crate::features::airlines::dtos::{AirlineResponseDto, CreateAirlineDto};
use crate::features::airlines::models::{Airline, AirlineChanges};
use crate::shared::types::ListQuery;

const CODE_TAKEN: &str = "Airline code already exists for another airline.";
const MISSING_BASE: &str = "Base airport does not exist.";

/// Service for airline operations
pub struct AirlineService {
    repos: Repositories,
}

impl AirlineService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Register a new airline at an existing base airport
    pub async fn create(&self, dto: CreateAirlineDto) -> Result<AirlineResponseDto> {
        self.ensure_base_airport(&dto.base_airport_name).await?;

        if self.repos.airlines.find_by_code(&dto.code).await?.is_some() {
            tracing::warn!("Rejected airline create: code '{}' is taken", dto.code);
            return Err(AppError::Conflict(CODE_TAKEN.to_string()));
        }

        let airline = self.repos.airlines.insert(dto.into()).await?;
        tracing::info!(
            "Airline {} ({}) created at {} (id={})",
            airline.name,
            airline.code,
            airline.base_airport_name,
            airline.id
        );

        Ok(airline.into())
    }

    /// Get airline by ID
    pub async fn get_by_id(&self, id: i32) -> Result<AirlineResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// List one page of airlines
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<AirlineResponseDto>> {
        let airlines = self
            .repos
            .airlines
            .list(query.offset(), query.limit())
            .await?;

        Ok(airlines.into_iter().map(Into::into).collect())
    }

    /// List every airline, used by the HTML listing
    pub async fn list_all(&self) -> Result<Vec<AirlineResponseDto>> {
        let airlines = self.repos.airlines.list_all().await?;
        Ok(airlines.into_iter().map(Into::into).collect())
    }

    /// Partially update an airline.
    ///
    /// A new code must not belong to another airline, and a new base must
    /// name an existing airport.
    pub async fn update(&self, id: i32, changes: AirlineChanges) -> Result<AirlineResponseDto> {
        self.find(id).await?;

        if let Some(ref code) = changes.code {
            if let Some(other) = self.repos.airlines.find_by_code(code).await? {
                if other.id != id {
                    tracing::warn!("Rejected airline {} update: code '{}' is taken", id, code);
                    return Err(AppError::Conflict(CODE_TAKEN.to_string()));
                }
            }
        }

        if let Some(ref base) = changes.base_airport_name {
            self.ensure_base_airport(base).await?;
        }

        let airline = self
            .repos
            .airlines
            .update(id, changes)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Airline {} updated", id);

        Ok(airline.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repos.airlines.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!("Airline {} deleted", id);

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Airline> {
        self.repos
            .airlines
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    async fn ensure_base_airport(&self, name: &str) -> Result<()> {
        if self.repos.airports.find_by_name(name).await?.is_none() {
            tracing::warn!("Rejected airline write: base airport '{}' does not exist", name);
            return Err(AppError::Referential(MISSING_BASE.to_string()));
        }
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Airline not found".to_string())
}

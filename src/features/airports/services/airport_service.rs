use crate::core::database::Repositories;
use crate::core::error::{AppError, Result};
use crate::features::airports::dtos::{AirportResponseDto, CreateAirportDto};
use crate::features::airports::models::{Airport, AirportChanges};
use crate::shared::types::ListQuery;

const NAME_TAKEN: &str = "Airport name already exists for another airport.";

/// Service for airport operations
pub struct AirportService {
    repos: Repositories,
}

impl AirportService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Register a new airport
    pub async fn create(&self, dto: CreateAirportDto) -> Result<AirportResponseDto> {
        if self.repos.airports.find_by_name(&dto.name).await?.is_some() {
            tracing::warn!("Rejected airport create: name '{}' is taken", dto.name);
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        let airport = self.repos.airports.insert(dto.into()).await?;
        tracing::info!("Airport {} created (id={})", airport.name, airport.id);

        Ok(airport.into())
    }

    /// Get airport by ID
    pub async fn get_by_id(&self, id: i32) -> Result<AirportResponseDto> {
        self.find(id).await.map(Into::into)
    }

    /// List one page of airports
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<AirportResponseDto>> {
        let airports = self
            .repos
            .airports
            .list(query.offset(), query.limit())
            .await?;

        Ok(airports.into_iter().map(Into::into).collect())
    }

    /// List every airport, used by the HTML listing
    pub async fn list_all(&self) -> Result<Vec<AirportResponseDto>> {
        let airports = self.repos.airports.list_all().await?;
        Ok(airports.into_iter().map(Into::into).collect())
    }

    /// Partially update an airport.
    ///
    /// A new name must not belong to a different airport. Airlines based at
    /// the airport follow the rename.
    pub async fn update(&self, id: i32, changes: AirportChanges) -> Result<AirportResponseDto> {
        self.find(id).await?;

        if let Some(ref name) = changes.name {
            if let Some(other) = self.repos.airports.find_by_name(name).await? {
                if other.id != id {
                    tracing::warn!("Rejected airport {} rename: '{}' is taken", id, name);
                    return Err(AppError::Conflict(NAME_TAKEN.to_string()));
                }
            }
        }

        let airport = self
            .repos
            .airports
            .update(id, changes)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Airport {} updated", id);

        Ok(airport.into())
    }

    /// Delete an airport that no airline uses as its base
    pub async fn delete(&self, id: i32) -> Result<()> {
        let airport = self.find(id).await?;

        let blocking_ids: Vec<i32> = self
            .repos
            .airlines
            .find_by_base_airport(&airport.name)
            .await?
            .into_iter()
            .map(|airline| airline.id)
            .collect();

        if !blocking_ids.is_empty() {
            tracing::warn!(
                "Rejected delete of airport {}: base of airlines {:?}",
                id,
                blocking_ids
            );
            return Err(AppError::Referential(format!(
                "Cannot delete airport because it is used as a base airport for the following airlines: {:?}",
                blocking_ids
            )));
        }

        if !self.repos.airports.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!("Airport {} deleted (id={})", airport.name, id);

        Ok(())
    }

    async fn find(&self, id: i32) -> Result<Airport> {
        self.repos
            .airports
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Airport not found".to_string())
}

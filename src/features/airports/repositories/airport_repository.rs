use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::handle_db_error;
use crate::core::error::{AppError, Result};
use crate::features::airports::models::{Airport, AirportChanges, NewAirport};

const AIRPORT_COLUMNS: &str = "id, name, runway_count, capacity, is_actual, updated_at";

/// Storage access for airports.
#[async_trait]
pub trait AirportRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Airport>>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Airport>>;

    /// One page of airports ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Airport>>;

    async fn list_all(&self) -> Result<Vec<Airport>>;

    async fn insert(&self, airport: NewAirport) -> Result<Airport>;

    /// Applies `changes` and bumps `updated_at`. Returns `None` if the row is gone.
    async fn update(&self, id: i32, changes: AirportChanges) -> Result<Option<Airport>>;

    /// Hard delete. Returns `true` if a row was removed.
    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgAirportRepository {
    pool: PgPool,
}

impl PgAirportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AirportRepository for PgAirportRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Airport>> {
        let query = format!("SELECT {} FROM airports WHERE id = $1", AIRPORT_COLUMNS);

        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Airport>> {
        let query = format!("SELECT {} FROM airports WHERE name = $1", AIRPORT_COLUMNS);

        sqlx::query_as::<_, Airport>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Airport>> {
        let query = format!(
            "SELECT {} FROM airports ORDER BY id LIMIT $1 OFFSET $2",
            AIRPORT_COLUMNS
        );

        sqlx::query_as::<_, Airport>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list airports: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_all(&self) -> Result<Vec<Airport>> {
        let query = format!("SELECT {} FROM airports ORDER BY id", AIRPORT_COLUMNS);

        sqlx::query_as::<_, Airport>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list airports: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, airport: NewAirport) -> Result<Airport> {
        let query = format!(
            r#"
            INSERT INTO airports (name, runway_count, capacity)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            AIRPORT_COLUMNS
        );

        sqlx::query_as::<_, Airport>(&query)
            .bind(airport.name)
            .bind(airport.runway_count)
            .bind(airport.capacity)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update(&self, id: i32, changes: AirportChanges) -> Result<Option<Airport>> {
        let query = format!(
            r#"
            UPDATE airports
            SET name = COALESCE($1, name),
                runway_count = COALESCE($2, runway_count),
                capacity = COALESCE($3, capacity),
                updated_at = NOW()
            WHERE id = $4
            RETURNING {}
            "#,
            AIRPORT_COLUMNS
        );

        sqlx::query_as::<_, Airport>(&query)
            .bind(changes.name)
            .bind(changes.runway_count)
            .bind(changes.capacity)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM airports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

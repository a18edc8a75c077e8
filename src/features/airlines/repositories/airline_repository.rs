use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::handle_db_error;
use crate::core::error::{AppError, Result};
use crate::features::airlines::models::{Airline, AirlineChanges, NewAirline};

const AIRLINE_COLUMNS: &str =
    "id, name, code, base_airport_name, employee_count, is_actual, updated_at";

/// Storage access for airlines.
#[async_trait]
pub trait AirlineRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Airline>>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Airline>>;

    /// Airlines whose base is the airport called `airport_name`, ordered by id.
    async fn find_by_base_airport(&self, airport_name: &str) -> Result<Vec<Airline>>;

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Airline>>;

    async fn list_all(&self) -> Result<Vec<Airline>>;

    async fn insert(&self, airline: NewAirline) -> Result<Airline>;

    async fn update(&self, id: i32, changes: AirlineChanges) -> Result<Option<Airline>>;

    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgAirlineRepository {
    pool: PgPool,
}

impl PgAirlineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AirlineRepository for PgAirlineRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Airline>> {
        let query = format!("SELECT {} FROM airlines WHERE id = $1", AIRLINE_COLUMNS);

        sqlx::query_as::<_, Airline>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Airline>> {
        let query = format!("SELECT {} FROM airlines WHERE code = $1", AIRLINE_COLUMNS);

        sqlx::query_as::<_, Airline>(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_base_airport(&self, airport_name: &str) -> Result<Vec<Airline>> {
        let query = format!(
            "SELECT {} FROM airlines WHERE base_airport_name = $1 ORDER BY id",
            AIRLINE_COLUMNS
        );

        sqlx::query_as::<_, Airline>(&query)
            .bind(airport_name)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Airline>> {
        let query = format!(
            "SELECT {} FROM airlines ORDER BY id LIMIT $1 OFFSET $2",
            AIRLINE_COLUMNS
        );

        sqlx::query_as::<_, Airline>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list airlines: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_all(&self) -> Result<Vec<Airline>> {
        let query = format!("SELECT {} FROM airlines ORDER BY id", AIRLINE_COLUMNS);

        sqlx::query_as::<_, Airline>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list airlines: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, airline: NewAirline) -> Result<Airline> {
        let query = format!(
            r#"
            INSERT INTO airlines (name, code, base_airport_name, employee_count)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            AIRLINE_COLUMNS
        );

        sqlx::query_as::<_, Airline>(&query)
            .bind(airline.name)
            .bind(airline.code)
            .bind(airline.base_airport_name)
            .bind(airline.employee_count)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update(&self, id: i32, changes: AirlineChanges) -> Result<Option<Airline>> {
        let query = format!(
            r#"
            UPDATE airlines
            SET name = COALESCE($1, name),
                code = COALESCE($2, code),
                base_airport_name = COALESCE($3, base_airport_name),
                employee_count = COALESCE($4, employee_count),
                updated_at = NOW()
            WHERE id = $5
            RETURNING {}
            "#,
            AIRLINE_COLUMNS
        );

        sqlx::query_as::<_, Airline>(&query)
            .bind(changes.name)
            .bind(changes.code)
            .bind(changes.base_airport_name)
            .bind(changes.employee_count)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM airlines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}

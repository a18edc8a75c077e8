use crate::core::config::DatabaseConfig;
use crate::features::airlines::repositories::{AirlineRepository, PgAirlineRepository};
use crate::features::airports::repositories::{AirportRepository, PgAirportRepository};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Creates the schema if it does not exist yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Persistence context handed to every service.
///
/// Built once at startup; each repository borrows connections from the
/// shared pool per call, so nothing here is request-scoped.
#[derive(Clone)]
pub struct Repositories {
    pub airports: Arc<dyn AirportRepository>,
    pub airlines: Arc<dyn AirlineRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            airports: Arc::new(PgAirportRepository::new(pool.clone())),
            airlines: Arc::new(PgAirlineRepository::new(pool)),
        }
    }
}

/// Convert database error to more specific AppError with user-friendly messages
pub fn handle_db_error(e: sqlx::Error) -> crate::core::error::AppError {
    use crate::core::error::AppError;

    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            if let Some(constraint) = db_err.constraint() {
                if constraint.contains("airlines_code") {
                    return AppError::Conflict(
                        "Airline code already exists for another airline.".to_string(),
                    );
                }
                if constraint.contains("airports_name") {
                    return AppError::Conflict(
                        "Airport name already exists for another airport.".to_string(),
                    );
                }
            }
            return AppError::Conflict("Record violates a uniqueness constraint.".to_string());
        }

        // Foreign key violation (PostgreSQL error code 23503)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::Referential(
                "Base airport does not exist or is still referenced by airlines.".to_string(),
            );
        }
    }

    AppError::Database(e)
}

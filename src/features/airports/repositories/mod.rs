mod airport_repository;

pub use airport_repository::{AirportRepository, PgAirportRepository};

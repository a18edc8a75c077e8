mod airline_repository;

pub use airline_repository::{AirlineRepository, PgAirlineRepository};

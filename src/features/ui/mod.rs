//! Read-only HTML listings of airports and airlines.

pub mod handlers;
pub mod routes;

pub use handlers::UiState;

mod airport;

pub use airport::{Airport, AirportChanges, NewAirport};

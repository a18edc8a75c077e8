mod airline;

pub use airline::{Airline, AirlineChanges, NewAirline};

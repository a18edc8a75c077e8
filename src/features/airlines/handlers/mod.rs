pub mod airline_handler;

pub use airline_handler::*;

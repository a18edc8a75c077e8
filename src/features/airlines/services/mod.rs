mod airline_service;

pub use airline_service::AirlineService;

pub mod airline_dto;

pub use airline_dto::{AirlineResponseDto, CreateAirlineDto, UpdateAirlineDto};

pub mod airport_dto;

pub use airport_dto::{AirportResponseDto, CreateAirportDto, UpdateAirportDto};

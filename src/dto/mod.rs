pub mod location_dto;
pub mod vehicle_dto;

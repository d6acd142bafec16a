//! Repositorios
//!
//! Operaciones en memoria sobre `TrackerData` y su persistencia en disco.

pub mod data_store;
pub mod location_repository;
pub mod vehicle_repository;

pub use data_store::JsonFileStore;
pub use location_repository::LocationRepository;
pub use vehicle_repository::VehicleRepository;

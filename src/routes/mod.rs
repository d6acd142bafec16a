pub mod location_routes;
pub mod static_routes;
pub mod vehicle_routes;

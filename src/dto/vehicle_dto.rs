use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::TIMESTAMP_FORMAT;
use crate::models::{HistoryEntry, TrackerData, Vehicle};
use crate::utils::validation::validate_not_empty;

// Query del dashboard
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

// Formulario para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct AddVehicleForm {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub reg: String,
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub location: String,
    #[serde(default)]
    pub moved_by: String,
}

// Formulario para mover un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct MoveVehicleForm {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub location: String,
    #[serde(default)]
    pub moved_by: String,
}

// Vehículo con el color de su ubicación
#[derive(Debug, Serialize)]
pub struct VehicleView {
    pub reg: String,
    pub location: String,
    pub color: Option<String>,
    pub moved_by: String,
    pub moved_at: String,
    pub history: Vec<HistoryEntry>,
}

impl VehicleView {
    pub fn from_vehicle(vehicle: Vehicle, data: &TrackerData) -> Self {
        let color = data.color_of(&vehicle.current_location).map(str::to_string);
        Self {
            moved_at: vehicle.moved_at.format(TIMESTAMP_FORMAT).to_string(),
            reg: vehicle.registration,
            location: vehicle.current_location,
            color,
            moved_by: vehicle.moved_by,
            history: vehicle.history,
        }
    }
}

// Dashboard
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub search: String,
    pub vehicles: Vec<VehicleView>,
    pub location_colors: IndexMap<String, String>,
}

// Formulario de alta: ubicaciones disponibles
#[derive(Debug, Serialize)]
pub struct AddVehicleView {
    pub locations: Vec<String>,
}

// Formulario de movimiento
#[derive(Debug, Serialize)]
pub struct MoveVehicleView {
    pub vehicle: VehicleView,
    pub locations: Vec<String>,
}

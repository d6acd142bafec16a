use serde::{Deserialize, Serialize};

use crate::models::Location;

// Formulario de alta y de renombrado (mismo campo)
#[derive(Debug, Deserialize)]
pub struct LocationForm {
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct LocationListView {
    pub locations: Vec<Location>,
}

#[derive(Debug, Serialize)]
pub struct EditLocationView {
    pub location: String,
    pub color: Option<String>,
}

// Response de health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub vehicles: usize,
    pub locations: usize,
}

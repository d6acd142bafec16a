//! Documento persistido de la aplicación
//!
//! `TrackerData` agrupa vehículos, ubicaciones y colores. Es lo que se
//! guarda en el fichero de datos y lo que comparten todos los handlers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::location::{palette_color, Location, DEFAULT_LOCATIONS};
use super::vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerData {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
    #[serde(default)]
    pub location_colors: IndexMap<String, String>,
}

fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|name| name.to_string()).collect()
}

impl Default for TrackerData {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            locations: default_locations(),
            location_colors: IndexMap::new(),
        }
    }
}

impl TrackerData {
    /// Asignar color a las ubicaciones que no lo tienen, en orden de lista.
    ///
    /// Devuelve el número de colores asignados.
    pub fn backfill_location_colors(&mut self) -> usize {
        let mut assigned = 0;
        for (index, name) in self.locations.iter().enumerate() {
            if !self.location_colors.contains_key(name) {
                self.location_colors
                    .insert(name.clone(), palette_color(index).to_string());
                assigned += 1;
            }
        }
        assigned
    }

    /// Asignar color a ubicaciones referenciadas por vehículos que no están en
    /// la lista (p.ej. `Unknown`), con la misma regla que al crear una ubicación.
    pub fn backfill_vehicle_location_colors(&mut self) -> usize {
        let mut assigned = 0;
        for vehicle in &self.vehicles {
            let name = &vehicle.current_location;
            if name.is_empty() || self.location_colors.contains_key(name) {
                continue;
            }
            let color = self.next_color();
            self.location_colors.insert(name.clone(), color);
            assigned += 1;
        }
        assigned
    }

    /// Algún vehículo está en una ubicación sin color
    pub fn has_uncolored_vehicle_locations(&self) -> bool {
        self.vehicles.iter().any(|vehicle| {
            let name = &vehicle.current_location;
            !name.is_empty() && !self.location_colors.contains_key(name)
        })
    }

    /// Siguiente color según el número de colores ya asignados
    pub fn next_color(&self) -> String {
        palette_color(self.location_colors.len()).to_string()
    }

    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.location_colors.get(name).map(String::as_str)
    }

    pub fn has_location(&self, name: &str) -> bool {
        self.locations.iter().any(|location| location == name)
    }

    /// Ubicaciones en orden con su color
    pub fn location_list(&self) -> Vec<Location> {
        self.locations
            .iter()
            .map(|name| Location {
                name: name.clone(),
                color: self.color_of(name).unwrap_or_else(|| palette_color(0)).to_string(),
            })
            .collect()
    }
}

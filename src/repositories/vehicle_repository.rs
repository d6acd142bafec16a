use std::ops::{Deref, DerefMut};

use chrono::NaiveDateTime;

use crate::models::{TrackerData, Vehicle};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{normalize_name, normalize_registration, registration_matches};

/// Operaciones sobre la colección de vehículos.
///
/// Funciona sobre cualquier referencia al estado: con `&TrackerData` solo
/// están disponibles las consultas, con `&mut TrackerData` también las mutaciones.
pub struct VehicleRepository<D> {
    data: D,
}

impl<D> VehicleRepository<D>
where
    D: Deref<Target = TrackerData>,
{
    pub fn new(data: D) -> Self {
        Self { data }
    }

    /// Buscar por matrícula (subcadena, sin distinguir mayúsculas).
    /// Una consulta vacía devuelve todos en orden de inserción.
    pub fn search(&self, query: &str) -> Vec<Vehicle> {
        self.data
            .vehicles
            .iter()
            .filter(|v| registration_matches(&v.registration, query))
            .cloned()
            .collect()
    }

    /// Primer vehículo con esa matrícula exacta
    pub fn find_by_registration(&self, registration: &str) -> Option<&Vehicle> {
        self.data
            .vehicles
            .iter()
            .find(|v| v.registration == registration)
    }
}

impl<D> VehicleRepository<D>
where
    D: DerefMut<Target = TrackerData>,
{
    /// Crear un vehículo. No se comprueba que la matrícula sea única.
    pub fn create(
        &mut self,
        registration: &str,
        location: &str,
        moved_by: &str,
        now: NaiveDateTime,
    ) -> Vehicle {
        let vehicle = Vehicle::new(
            normalize_registration(registration),
            location.to_string(),
            normalize_name(moved_by),
            now,
        );
        self.data.vehicles.push(vehicle.clone());
        vehicle
    }

    /// Mover el primer vehículo con esa matrícula exacta
    pub fn relocate(
        &mut self,
        registration: &str,
        location: &str,
        moved_by: &str,
        now: NaiveDateTime,
    ) -> AppResult<Vehicle> {
        let vehicle = self
            .data
            .vehicles
            .iter_mut()
            .find(|v| v.registration == registration)
            .ok_or_else(|| not_found_error("Vehicle", registration))?;

        vehicle.relocate(location.to_string(), normalize_name(moved_by), now);
        Ok(vehicle.clone())
    }

    /// Eliminar todos los vehículos con esa matrícula. Devuelve cuántos se eliminaron.
    pub fn delete(&mut self, registration: &str) -> usize {
        let before = self.data.vehicles.len();
        self.data.vehicles.retain(|v| v.registration != registration);
        before - self.data.vehicles.len()
    }
}

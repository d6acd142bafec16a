use std::ops::{Deref, DerefMut};

use chrono::NaiveDateTime;

use crate::models::location::{Location, SYSTEM_ACTOR, UNKNOWN_LOCATION};
use crate::models::{HistoryEntry, TrackerData};
use crate::utils::errors::{bad_request_error, conflict_error, not_found_error, AppResult};
use crate::utils::validation::normalize_name;

/// Operaciones sobre la lista ordenada de ubicaciones y sus colores.
///
/// Renombrar y eliminar propagan el cambio a los vehículos.
pub struct LocationRepository<D> {
    data: D,
}

impl<D> LocationRepository<D>
where
    D: Deref<Target = TrackerData>,
{
    pub fn new(data: D) -> Self {
        Self { data }
    }

    pub fn list(&self) -> Vec<Location> {
        self.data.location_list()
    }

    pub fn names(&self) -> Vec<String> {
        self.data.locations.clone()
    }

    /// Nombre nuevo válido: no vacío y no repetido
    fn check_new_name(&self, name: &str) -> AppResult<()> {
        if name.is_empty() {
            return Err(bad_request_error("Location name must not be empty"));
        }
        if self.data.has_location(name) {
            return Err(conflict_error("Location", "name", name));
        }
        Ok(())
    }
}

impl<D> LocationRepository<D>
where
    D: DerefMut<Target = TrackerData>,
{
    /// Añadir al final de la lista con el siguiente color de la paleta
    pub fn add(&mut self, name: &str) -> AppResult<Location> {
        let name = normalize_name(name);
        self.check_new_name(&name)?;

        let color = self.data.next_color();
        self.data.locations.push(name.clone());
        self.data.location_colors.insert(name.clone(), color.clone());
        Ok(Location { name, color })
    }

    /// Renombrar en su sitio. Los vehículos en esa ubicación y las entradas
    /// de historial que la mencionan pasan a usar el nombre nuevo.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> AppResult<Location> {
        let new_name = normalize_name(new_name);
        self.check_new_name(&new_name)?;

        let index = self
            .data
            .locations
            .iter()
            .position(|name| name == old_name)
            .ok_or_else(|| not_found_error("Location", old_name))?;

        let data = &mut *self.data;
        data.locations[index] = new_name.clone();

        let color = match data.location_colors.shift_remove(old_name) {
            Some(color) => color,
            None => data.next_color(),
        };
        data.location_colors.insert(new_name.clone(), color.clone());

        for vehicle in data.vehicles.iter_mut() {
            if vehicle.current_location == old_name {
                vehicle.current_location = new_name.clone();
            }
            for entry in vehicle.history.iter_mut() {
                if entry.location == old_name {
                    entry.location = new_name.clone();
                }
            }
        }

        Ok(Location { name: new_name, color })
    }

    /// Eliminar la ubicación. Los vehículos que estaban en ella pasan a
    /// `Unknown` con una entrada nueva en el historial.
    ///
    /// Devuelve cuántos vehículos se movieron.
    pub fn delete(&mut self, name: &str, now: NaiveDateTime) -> AppResult<usize> {
        let index = self
            .data
            .locations
            .iter()
            .position(|location| location == name)
            .ok_or_else(|| not_found_error("Location", name))?;

        let data = &mut *self.data;
        data.locations.remove(index);
        data.location_colors.shift_remove(name);

        let mut moved = 0;
        for vehicle in data.vehicles.iter_mut() {
            // moved_by/moved_at del vehículo no cambian; solo el historial registra al sistema
            if vehicle.current_location == name {
                vehicle.current_location = UNKNOWN_LOCATION.to_string();
                vehicle
                    .history
                    .push(HistoryEntry::new(UNKNOWN_LOCATION, SYSTEM_ACTOR, now));
                moved += 1;
            }
        }
        Ok(moved)
    }
}

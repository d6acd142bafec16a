use tracing::{info, warn};
use validator::Validate;

use crate::controllers::{ignore_rejection, local_now};
use crate::dto::vehicle_dto::{
    AddVehicleForm, AddVehicleView, DashboardView, MoveVehicleForm, MoveVehicleView, VehicleView,
};
use crate::models::Vehicle;
use crate::repositories::{LocationRepository, VehicleRepository};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::normalize_registration;

pub struct VehicleController {
    state: AppState,
}

impl VehicleController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn dashboard(&self, search: Option<String>) -> Result<DashboardView, AppError> {
        // Ubicaciones referenciadas solo por vehículos (p.ej. Unknown) también necesitan color
        if self.state.read().await.has_uncolored_vehicle_locations() {
            let assigned = self
                .state
                .mutate(|data| Ok(data.backfill_vehicle_location_colors()))
                .await?;
            info!("🎨 {} colores asignados a ubicaciones sin color", assigned);
        }

        let query = search.map(|q| normalize_registration(&q)).unwrap_or_default();
        let data = self.state.read().await;
        let vehicles = VehicleRepository::new(&*data)
            .search(&query)
            .into_iter()
            .map(|v| VehicleView::from_vehicle(v, &data))
            .collect();

        Ok(DashboardView {
            search: query,
            vehicles,
            location_colors: data.location_colors.clone(),
        })
    }

    pub async fn add_form(&self) -> AddVehicleView {
        let data = self.state.read().await;
        AddVehicleView {
            locations: LocationRepository::new(&*data).names(),
        }
    }

    /// `None` si el formulario se ignoró (matrícula o ubicación vacías)
    pub async fn create(&self, form: AddVehicleForm) -> Result<Option<Vehicle>, AppError> {
        if ignore_rejection("Alta de vehículo", form.validate().map_err(AppError::from))?.is_none() {
            return Ok(None);
        }

        let now = local_now();
        let vehicle = self
            .state
            .mutate(|data| {
                Ok(VehicleRepository::new(data).create(&form.reg, &form.location, &form.moved_by, now))
            })
            .await?;

        info!(
            "🚗 Vehículo {} creado en '{}' por '{}'",
            vehicle.registration, vehicle.current_location, vehicle.moved_by
        );
        Ok(Some(vehicle))
    }

    pub async fn move_form(&self, registration: &str) -> Result<MoveVehicleView, AppError> {
        let data = self.state.read().await;
        let vehicle = VehicleRepository::new(&*data)
            .find_by_registration(registration)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", registration))?;

        Ok(MoveVehicleView {
            vehicle: VehicleView::from_vehicle(vehicle, &data),
            locations: LocationRepository::new(&*data).names(),
        })
    }

    /// 404 si el vehículo no existe; `None` si el formulario se ignoró
    pub async fn relocate(
        &self,
        registration: &str,
        form: MoveVehicleForm,
    ) -> Result<Option<Vehicle>, AppError> {
        // Un vehículo inexistente es 404 aunque el formulario sea inválido
        if self.state.read().await.vehicles.iter().all(|v| v.registration != registration) {
            return Err(not_found_error("Vehicle", registration));
        }
        if ignore_rejection("Movimiento de vehículo", form.validate().map_err(AppError::from))?.is_none() {
            return Ok(None);
        }

        let now = local_now();
        let vehicle = self
            .state
            .mutate(|data| {
                VehicleRepository::new(data).relocate(registration, &form.location, &form.moved_by, now)
            })
            .await?;

        info!(
            "📍 Vehículo {} movido a '{}' por '{}'",
            vehicle.registration, vehicle.current_location, vehicle.moved_by
        );
        Ok(Some(vehicle))
    }

    pub async fn delete(&self, registration: &str) -> Result<usize, AppError> {
        let removed = self
            .state
            .mutate(|data| Ok(VehicleRepository::new(data).delete(registration)))
            .await?;

        if removed == 0 {
            warn!("🗑️ Ningún vehículo con matrícula '{}' para eliminar", registration);
        } else {
            info!("🗑️ {} vehículo(s) {} eliminado(s)", removed, registration);
        }
        Ok(removed)
    }
}

use tracing::info;

use crate::controllers::{ignore_rejection, local_now};
use crate::dto::location_dto::{EditLocationView, LocationListView};
use crate::repositories::LocationRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct LocationController {
    state: AppState,
}

impl LocationController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list(&self) -> LocationListView {
        let data = self.state.read().await;
        LocationListView {
            locations: LocationRepository::new(&*data).list(),
        }
    }

    pub async fn edit_form(&self, name: &str) -> EditLocationView {
        let data = self.state.read().await;
        EditLocationView {
            location: name.to_string(),
            color: data.color_of(name).map(str::to_string),
        }
    }

    pub async fn create(&self, name: &str) -> Result<(), AppError> {
        let result = self
            .state
            .mutate(|data| LocationRepository::new(data).add(name))
            .await;

        if let Some(location) = ignore_rejection("Alta de ubicación", result)? {
            info!("🏷️ Ubicación '{}' creada con color {}", location.name, location.color);
        }
        Ok(())
    }

    pub async fn rename(&self, old_name: &str, new_name: &str) -> Result<(), AppError> {
        let result = self
            .state
            .mutate(|data| LocationRepository::new(data).rename(old_name, new_name))
            .await;

        if let Some(location) = ignore_rejection("Renombrado de ubicación", result)? {
            info!("✏️ Ubicación '{}' renombrada a '{}'", old_name, location.name);
        }
        Ok(())
    }

    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        let now = local_now();
        let result = self
            .state
            .mutate(|data| LocationRepository::new(data).delete(name, now))
            .await;

        if let Some(moved) = ignore_rejection("Borrado de ubicación", result)? {
            info!("🗑️ Ubicación '{}' eliminada, {} vehículo(s) movidos a Unknown", name, moved);
        }
        Ok(())
    }
}

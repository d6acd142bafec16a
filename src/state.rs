//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::config::environment::EnvironmentConfig;
use crate::models::TrackerData;
use crate::repositories::JsonFileStore;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub store: Arc<JsonFileStore>,
    data: Arc<RwLock<TrackerData>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: JsonFileStore, data: TrackerData) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Cargar el estado desde el fichero configurado
    pub fn load(config: EnvironmentConfig) -> AppResult<Self> {
        let store = JsonFileStore::new(config.data_file.clone());
        let data = store.load()?;
        Ok(Self::new(config, store, data))
    }

    /// Acceso de solo lectura
    pub async fn read(&self) -> RwLockReadGuard<'_, TrackerData> {
        self.data.read().await
    }

    /// Ejecutar una mutación y persistir el resultado.
    ///
    /// El lock de escritura se mantiene durante todo el ciclo
    /// leer-modificar-guardar. La operación trabaja sobre una copia que solo
    /// reemplaza al estado en memoria si se guardó bien; si la operación
    /// falla o no cambia nada, no se escribe el fichero.
    pub async fn mutate<T, F>(&self, operation: F) -> AppResult<T>
    where
        F: FnOnce(&mut TrackerData) -> AppResult<T>,
    {
        let mut guard = self.data.write().await;

        let mut next = guard.clone();
        let result = operation(&mut next)?;

        if next != *guard {
            self.store.save(&next)?;
            *guard = next;
        } else {
            log::debug!("🔍 Mutación sin cambios, no se guarda");
        }
        Ok(result)
    }
}

pub mod location_controller;
pub mod vehicle_controller;

use chrono::{Local, NaiveDateTime, SubsecRound};
use tracing::warn;

use crate::utils::errors::AppResult;

/// Hora local actual con precisión de segundos
pub(crate) fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Los rechazos (campo vacío, nombre repetido, ubicación inexistente) se
/// registran y se ignoran: la ruta redirige igual que si hubiera funcionado.
pub(crate) fn ignore_rejection<T>(operation: &str, result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_rejection() => {
            warn!("⚠️ {} ignorado: {}", operation, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

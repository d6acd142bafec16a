//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para normalizar y validar
//! los campos que llegan desde los formularios.

use validator::ValidationError;

/// Normalizar una matrícula: sin espacios alrededor y en mayúsculas
pub fn normalize_registration(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Normalizar un nombre libre (ubicación, persona)
pub fn normalize_name(value: &str) -> String {
    value.trim().to_string()
}

/// Coincidencia de búsqueda sin distinguir mayúsculas; consulta vacía coincide siempre
pub fn registration_matches(registration: &str, query: &str) -> bool {
    let query = query.trim().to_uppercase();
    query.is_empty() || registration.to_uppercase().contains(&query)
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores y validación
//! de los datos que llegan por formulario.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};

//! Modelo de Location
//!
//! Ubicaciones con nombre y color de visualización. Los colores salen de una
//! paleta fija que se recorre de forma cíclica.

use serde::{Deserialize, Serialize};

/// Ubicación a la que se mueve un vehículo cuya ubicación fue eliminada
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Autor registrado en los movimientos automáticos
pub const SYSTEM_ACTOR: &str = "system";

/// Ubicaciones creadas cuando no existe fichero de datos
pub const DEFAULT_LOCATIONS: [&str; 4] = ["Showroom", "Body Fitter", "Radio Installer", "Repair Shop"];

/// Paleta de colores (Bootstrap + extras)
pub const PALETTE: [&str; 15] = [
    "primary", "secondary", "success", "danger", "warning",
    "info", "light", "dark",
    "purple", "pink", "teal", "orange", "cyan", "indigo", "lime",
];

/// Color de la paleta para un índice dado (cíclico)
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Ubicación con su color, tal como la consume la capa de presentación
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub color: String,
}

//! Middleware del servidor
//!
//! Capas de tower-http aplicadas a todas las rutas.

pub mod cors;

//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al formato del fichero de datos JSON.

pub mod location;
pub mod tracker;
pub mod vehicle;

pub use location::{Location, PALETTE, UNKNOWN_LOCATION};
pub use tracker::TrackerData;
pub use vehicle::{HistoryEntry, Vehicle};

//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su historial de movimientos.
//! Mapea exactamente al formato del fichero de datos (`reg`, `location`,
//! `moved_by`, `moved_at`, `history`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Formato de fecha usado en el fichero de datos (hora local, precisión de segundos)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialización de `NaiveDateTime` con [`TIMESTAMP_FORMAT`]
pub mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Entrada del historial: `(location, moved_by, moved_at)`.
///
/// En disco se guarda como un array de tres strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawHistoryEntry", try_from = "RawHistoryEntry")]
pub struct HistoryEntry {
    pub location: String,
    pub moved_by: String,
    pub moved_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize)]
struct RawHistoryEntry(String, String, String);

impl From<HistoryEntry> for RawHistoryEntry {
    fn from(entry: HistoryEntry) -> Self {
        RawHistoryEntry(
            entry.location,
            entry.moved_by,
            entry.moved_at.format(TIMESTAMP_FORMAT).to_string(),
        )
    }
}

impl TryFrom<RawHistoryEntry> for HistoryEntry {
    type Error = String;

    fn try_from(raw: RawHistoryEntry) -> Result<Self, Self::Error> {
        let moved_at = NaiveDateTime::parse_from_str(&raw.2, TIMESTAMP_FORMAT)
            .map_err(|e| format!("invalid history timestamp '{}': {}", raw.2, e))?;
        Ok(HistoryEntry {
            location: raw.0,
            moved_by: raw.1,
            moved_at,
        })
    }
}

impl HistoryEntry {
    pub fn new(location: impl Into<String>, moved_by: impl Into<String>, moved_at: NaiveDateTime) -> Self {
        Self {
            location: location.into(),
            moved_by: moved_by.into(),
            moved_at,
        }
    }
}

/// Vehicle principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "reg")]
    pub registration: String,
    #[serde(rename = "location")]
    pub current_location: String,
    pub moved_by: String,
    #[serde(with = "timestamp_format")]
    pub moved_at: NaiveDateTime,
    /// Más antiguo primero; nunca vacío después de la creación
    pub history: Vec<HistoryEntry>,
}

impl Vehicle {
    /// Crear un vehículo con una sola entrada de historial
    pub fn new(registration: String, location: String, moved_by: String, moved_at: NaiveDateTime) -> Self {
        let history = vec![HistoryEntry::new(location.clone(), moved_by.clone(), moved_at)];
        Self {
            registration,
            current_location: location,
            moved_by,
            moved_at,
            history,
        }
    }

    /// Mover el vehículo y añadir la entrada correspondiente al historial
    pub fn relocate(&mut self, location: String, moved_by: String, moved_at: NaiveDateTime) {
        self.history
            .push(HistoryEntry::new(location.clone(), moved_by.clone(), moved_at));
        self.current_location = location;
        self.moved_by = moved_by;
        self.moved_at = moved_at;
    }

    /// La última entrada del historial coincide con la ubicación actual
    pub fn is_consistent(&self) -> bool {
        self.history
            .last()
            .map(|entry| entry.location == self.current_location)
            .unwrap_or(false)
    }
}

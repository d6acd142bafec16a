//! Persistencia en fichero JSON
//!
//! El estado completo (`TrackerData`) se lee al arrancar y se reescribe
//! entero después de cada mutación. La escritura va a un fichero temporal
//! en el mismo directorio y luego se renombra sobre el fichero de datos.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::models::TrackerData;
use crate::utils::errors::AppResult;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Leer el fichero de datos, o el estado por defecto si no existe.
    ///
    /// Un fichero malformado es un error: no se intenta recuperar.
    pub fn load(&self) -> AppResult<TrackerData> {
        let mut data = match File::open(&self.path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                let data: TrackerData = serde_json::from_reader(reader)?;
                log::info!(
                    "📂 Datos cargados de {}: {} vehículos, {} ubicaciones",
                    self.path.display(),
                    data.vehicles.len(),
                    data.locations.len()
                );
                data
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("📂 {} no existe, usando datos por defecto", self.path.display());
                TrackerData::default()
            }
            Err(e) => return Err(e.into()),
        };

        let inconsistent = data.vehicles.iter().filter(|v| !v.is_consistent()).count();
        if inconsistent > 0 {
            log::warn!(
                "⚠️ {} vehículo(s) con historial que no termina en su ubicación actual",
                inconsistent
            );
        }

        let assigned = data.backfill_location_colors();
        if assigned > 0 {
            log::debug!("🎨 {} colores asignados al cargar", assigned);
        }
        Ok(data)
    }

    /// Reescribir el fichero de datos completo
    pub fn save(&self, data: &TrackerData) -> AppResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, data)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;

        log::debug!("💾 Datos guardados en {}", self.path.display());
        Ok(())
    }
}

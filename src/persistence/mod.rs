//! Persistencia del documento de boards
//!
//! El store entero se serializa como un único documento JSON en una ruta
//! fija. Cada mutación reescribe el documento completo; no hay escrituras
//! parciales. La escritura pasa por un archivo temporal renombrado en
//! sitio para no dejar nunca un documento truncado a medias.

pub mod migration;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::models::board::BoardData;
use self::migration::PersistedDocument;

/// Resultado de la carga inicial, distinguible para el composition root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Documento en formato actual cargado sin incidencias
    Loaded,
    /// No existía archivo de datos; se empieza con un store vacío
    Missing,
    /// Documento legacy migrado al formato actual
    Migrated,
    /// Documento ilegible descartado; se empieza con un store vacío.
    /// El llamante puede respaldar el archivo antes de que la próxima
    /// escritura lo sobreescriba.
    Recovered,
}

pub struct PersistenceManager {
    data_file: PathBuf,
}

impl PersistenceManager {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Cargar el documento desde disco.
    ///
    /// Nunca falla: un archivo ausente o ilegible produce un store vacío
    /// con el `LoadStatus` correspondiente. Un documento legacy se migra
    /// y se guarda inmediatamente en el formato actual.
    pub fn load(&self) -> (BoardData, LoadStatus) {
        let raw = match fs::read_to_string(&self.data_file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return (BoardData::default(), LoadStatus::Missing);
            }
            Err(e) => {
                error!(
                    "❌ No se pudo leer {}: {}. Empezando con un store vacío",
                    self.data_file.display(),
                    e
                );
                return (BoardData::default(), LoadStatus::Recovered);
            }
        };

        match PersistedDocument::decode(&raw) {
            Ok(PersistedDocument::Current(data)) => (data, LoadStatus::Loaded),
            Ok(PersistedDocument::Legacy(legacy)) => {
                info!("📦 Documento legacy detectado, migrando al formato actual...");
                let data = migration::migrate(legacy);
                if let Err(e) = self.save(&data) {
                    error!("❌ No se pudo guardar el documento migrado: {}", e);
                }
                info!("✅ Migración completada");
                (data, LoadStatus::Migrated)
            }
            Err(e) => {
                error!(
                    "❌ Documento persistido ilegible en {}: {}. Se descarta y se empieza de cero (pérdida de datos)",
                    self.data_file.display(),
                    e
                );
                (BoardData::default(), LoadStatus::Recovered)
            }
        }
    }

    /// Renombrar el archivo de datos ilegible a `<archivo>.corrupt`
    /// para conservarlo antes de que la próxima escritura lo reemplace.
    pub fn backup_unreadable(&self) -> io::Result<PathBuf> {
        let mut backup = self.data_file.as_os_str().to_os_string();
        backup.push(".corrupt");
        let backup = PathBuf::from(backup);
        fs::rename(&self.data_file, &backup)?;
        Ok(backup)
    }

    /// Reescribir el documento completo en disco.
    ///
    /// Escritura a archivo temporal + rename atómico: el archivo de datos
    /// siempre contiene un documento completo, incluso si el proceso cae
    /// a mitad de la escritura.
    pub fn save(&self, data: &BoardData) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.data_file.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.data_file)?;
        Ok(())
    }
}

//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración, con los valores por defecto del servidor original.

use std::env;
use std::path::PathBuf;

/// Tamaño máximo de una imagen subida: 10 MiB
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub uploads_dir: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            data_file: env::var("DATA_FILE")
                .unwrap_or_else(|_| "board_data.json".to_string())
                .into(),
            uploads_dir: env::var("UPLOADS_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

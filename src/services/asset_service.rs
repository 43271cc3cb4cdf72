//! Gestión de imágenes subidas
//!
//! Las imágenes viven bajo un directorio fijo y se referencian desde los
//! boards como `/uploads/<nombre>`. El nombre lleva un timestamp para no
//! colisionar con subidas anteriores. El borrado es best-effort: la
//! ausencia del archivo no es un error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::utils::errors::AppResult;

pub struct AssetManager {
    uploads_dir: PathBuf,
}

impl AssetManager {
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Crear el directorio de uploads si no existe
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.uploads_dir)
    }

    /// Persistir los bytes de una imagen subida.
    ///
    /// La validación de content-type y el límite de tamaño son
    /// responsabilidad de la capa de subida; aquí sólo se escribe el
    /// archivo. Devuelve la ruta pública `/uploads/<nombre>`.
    pub fn store(&self, bytes: &[u8], extension: Option<&str>) -> AppResult<String> {
        self.ensure_dir()?;

        let timestamp = Utc::now().timestamp_millis();
        let filename = match extension {
            Some(ext) => format!("board-image-{}.{}", timestamp, ext),
            None => format!("board-image-{}", timestamp),
        };

        fs::write(self.uploads_dir.join(&filename), bytes)?;
        info!("🖼️ Imagen guardada: {}", filename);

        Ok(format!("/uploads/{}", filename))
    }

    /// Borrar la imagen referenciada, si sigue en disco.
    ///
    /// Idempotente: la ausencia del archivo no es un error. Otros fallos
    /// del filesystem se registran y se tragan; la limpieza de assets
    /// nunca bloquea una mutación de datos.
    pub fn remove(&self, image_path: &str) {
        let Some(filename) = Path::new(image_path).file_name() else {
            return;
        };
        let path = self.uploads_dir.join(filename);

        match fs::remove_file(&path) {
            Ok(()) => info!("🗑️ Imagen borrada: {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("⚠️ No se pudo borrar {}: {}", path.display(), e),
        }
    }
}

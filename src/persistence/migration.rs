//! Migración del formato legacy
//!
//! El formato antiguo del documento en disco tenía un único board
//! implícito: una secuencia `zones` a nivel raíz, un campo `boardImage`
//! y rutas sin `boardId`. Este módulo detecta la variante (legacy o
//! actual) una sola vez al cargar y convierte el documento legacy al
//! formato actual con una función pura.

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::models::board::{Board, BoardData};
use crate::models::route::Route;

/// Documento legacy: un solo board implícito
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDocument {
    #[serde(default)]
    pub board_image: Option<String>,
    #[serde(default)]
    pub zones: Vec<Value>,
    #[serde(default)]
    pub routes: Vec<LegacyRoute>,
}

/// Ruta legacy: sin boardId ni timestamp fiable
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRoute {
    pub name: String,
    #[serde(default)]
    pub zones: Vec<Value>,
}

/// Variante del documento persistido, resuelta una sola vez al cargar
#[derive(Debug)]
pub enum PersistedDocument {
    Current(BoardData),
    Legacy(LegacyDocument),
}

impl PersistedDocument {
    /// Decodificar el texto crudo del archivo de datos.
    ///
    /// La presencia de `boards` marca el formato actual; un documento sin
    /// `boards` pero con `zones` a nivel raíz es el formato legacy.
    /// Cualquier otra cosa se decodifica como formato actual con los
    /// campos ausentes rellenados por defecto.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        if value.get("boards").is_none() && value.get("zones").is_some() {
            Ok(Self::Legacy(serde_json::from_value(value)?))
        } else {
            Ok(Self::Current(serde_json::from_value(value)?))
        }
    }
}

/// Convertir cualquier variante al formato actual.
///
/// Sobre un documento ya actual es un passthrough sin cambios, así que
/// ejecutarla repetidamente es inocuo.
pub fn migrate_document(doc: PersistedDocument) -> BoardData {
    match doc {
        PersistedDocument::Current(data) => data,
        PersistedDocument::Legacy(legacy) => migrate(legacy),
    }
}

/// Migrar un documento legacy al formato actual.
///
/// Sólo se sintetiza un board si el documento tiene imagen y al menos
/// una zona; en otro caso el resultado es un store vacío. Las rutas
/// legacy se conservan apuntando al board sintetizado, con su timestamp
/// reiniciado (el formato antiguo no guardaba timestamps fiables).
pub fn migrate(legacy: LegacyDocument) -> BoardData {
    let image = match legacy.board_image {
        Some(image) if !image.is_empty() && !legacy.zones.is_empty() => image,
        _ => return BoardData::default(),
    };

    let image_path = if image.starts_with('/') {
        image
    } else {
        format!("/{}", image)
    };

    let board = Board {
        id: Uuid::new_v4().to_string(),
        name: "Migrated Board".to_string(),
        image_path,
        zones: legacy.zones,
        created_at: chrono::Utc::now(),
    };
    let board_id = board.id.clone();

    let routes = legacy
        .routes
        .into_iter()
        .map(|r| Route::new(r.name, r.zones, board_id.clone()))
        .collect();

    BoardData {
        boards: vec![board],
        current_board: Some(board_id),
        routes,
    }
}

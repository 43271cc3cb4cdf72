//! Modelo de Board
//!
//! Un Board es una imagen de referencia subida por el usuario más sus
//! zonas anotadas. Este módulo también define `BoardData`, el documento
//! raíz que se serializa entero a disco.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::route::Route;

/// Board: imagen de referencia + zonas anotadas
///
/// Las zonas son descriptores geométricos opacos definidos por el
/// cliente; el servidor nunca interpreta su contenido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    pub image_path: String,
    #[serde(default)]
    pub zones: Vec<Value>,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Crear un board nuevo para una imagen recién subida
    pub fn new(image_path: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: format!("Board {}", now.format("%d/%m/%Y")),
            image_path,
            zones: Vec::new(),
            created_at: now,
        }
    }
}

/// Documento raíz persistido en disco
///
/// Campos opcionales ausentes en el JSON se rellenan con valores vacíos,
/// igual que hace la carga tolerante del formato actual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub current_board: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl BoardData {
    /// Board actualmente seleccionado, si lo hay y si sigue existiendo
    pub fn current(&self) -> Option<&Board> {
        let id = self.current_board.as_deref()?;
        self.boards.iter().find(|b| b.id == id)
    }

    /// Rutas asociadas a un board concreto
    pub fn routes_for(&self, board_id: &str) -> Vec<Route> {
        self.routes
            .iter()
            .filter(|r| r.board_id == board_id)
            .cloned()
            .collect()
    }
}

//! Modelo de Route
//!
//! Una ruta es una selección ordenada de zonas con nombre, ligada a un
//! board concreto. Su identidad es el par (name, boardId).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub name: String,
    #[serde(default)]
    pub zones: Vec<Value>,
    pub board_id: String,
    pub created_at: DateTime<Utc>,
}

impl Route {
    pub fn new(name: String, zones: Vec<Value>, board_id: String) -> Self {
        Self {
            name,
            zones,
            board_id,
            created_at: Utc::now(),
        }
    }
}

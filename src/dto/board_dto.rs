//! DTOs de la API de boards y rutas

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::board::Board;
use crate::models::route::Route;

/// Request para guardar las zonas del board actual
#[derive(Debug, Deserialize)]
pub struct SaveZonesRequest {
    pub zones: Vec<Value>,
}

/// Request para crear o actualizar una ruta
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRouteRequest {
    pub name: String,
    pub selected_zones: Vec<Value>,
}

/// Response de `GET /api/current-board`
#[derive(Debug, Serialize)]
pub struct CurrentBoardResponse {
    pub board: Option<Board>,
    pub routes: Vec<Route>,
}

/// Response genérica de éxito
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Response de `POST /api/upload-image`
#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    pub success: bool,
    pub board: Board,
}

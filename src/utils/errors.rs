//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No board selected")]
    NoCurrentBoard,

    #[error("Board not found")]
    BoardNotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Asset I/O error: {0}")]
    AssetIo(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API (contrato `{success: false, error}`)
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NoCurrentBoard => {
                warn!("⚠️ Operación sin board seleccionado");
                (StatusCode::BAD_REQUEST, "No board selected".to_string())
            }

            AppError::BoardNotFound => {
                // currentBoard apunta a un board que ya no existe
                error!("❌ Referencia currentBoard obsoleta: board inexistente");
                (StatusCode::BAD_REQUEST, "Board not found".to_string())
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }

            AppError::AssetIo(e) => {
                error!("❌ Error de I/O con assets: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to store image: {}", e),
                )
            }

            AppError::Internal(msg) => {
                error!("❌ Error interno: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

//! Rutas de la API de boards
//!
//! Handlers finos: extraen el payload, toman el lock que toca y delegan
//! en el servicio. Toda la lógica de negocio vive en `BoardService`.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::config::environment::MAX_UPLOAD_BYTES;
use crate::dto::board_dto::{
    CurrentBoardResponse, SaveRouteRequest, SaveZonesRequest, SuccessResponse,
    UploadImageResponse,
};
use crate::models::board::BoardData;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn create_board_router() -> Router<AppState> {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/current-board", get(get_current_board))
        .route("/api/zones", post(save_zones))
        .route("/api/routes", post(save_route))
        .route("/api/routes/:name", delete(delete_route))
        .route(
            "/api/upload-image",
            // Margen extra sobre el límite por el framing multipart;
            // el tamaño real del archivo se comprueba en el handler
            post(upload_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
        )
        .route("/api/board-image", delete(delete_board))
}

/// GET /api/data - documento completo del store
async fn get_data(State(state): State<AppState>) -> Json<BoardData> {
    let store = state.store.read().await;
    Json(store.document().clone())
}

/// GET /api/current-board - board actual y sus rutas
async fn get_current_board(State(state): State<AppState>) -> Json<CurrentBoardResponse> {
    let store = state.store.read().await;
    Json(store.current_view())
}

/// POST /api/zones - reemplazar las zonas del board actual
async fn save_zones(
    State(state): State<AppState>,
    Json(request): Json<SaveZonesRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let mut store = state.store.write().await;
    store.set_zones(request.zones)?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/routes - crear o actualizar una ruta del board actual
async fn save_route(
    State(state): State<AppState>,
    Json(request): Json<SaveRouteRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let mut store = state.store.write().await;
    store.upsert_route(request.name, request.selected_zones)?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/routes/:name - borrar una ruta (idempotente)
async fn delete_route(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let mut store = state.store.write().await;
    store.delete_route(&name)?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/upload-image - subir una imagen y crear el board nuevo
async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadImageResponse>> {
    let mut file: Option<(Option<String>, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("boardImage") {
            let filename = field.file_name().map(|n| n.to_string());
            let content_type = field.content_type().map(|c| c.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Read error: {}", e)))?
                .to_vec();
            file = Some((filename, content_type, bytes));
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    // Sólo imágenes
    if !content_type.as_deref().unwrap_or("").starts_with("image/") {
        return Err(AppError::BadRequest(
            "Only image files are allowed".to_string(),
        ));
    }

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest("File too large".to_string()));
    }

    let extension = filename
        .as_deref()
        .and_then(|f| std::path::Path::new(f).extension())
        .and_then(|e| e.to_str())
        .map(|e| e.to_string());

    let mut store = state.store.write().await;
    let board = store.upload_board_image(&bytes, extension.as_deref())?;

    Ok(Json(UploadImageResponse {
        success: true,
        board,
    }))
}

/// DELETE /api/board-image - borrar el board actual (idempotente)
async fn delete_board(State(state): State<AppState>) -> AppResult<Json<SuccessResponse>> {
    let mut store = state.store.write().await;
    store.delete_current_board()?;
    Ok(Json(SuccessResponse::ok()))
}

//! Operaciones sobre el store de boards y rutas
//!
//! `BoardService` es el único componente que muta el modelo en memoria.
//! Cada operación valida antes de tocar nada (ningún fallo deja el store
//! en un estado estructuralmente inválido) y, tras una mutación
//! exitosa, reescribe el documento completo en disco. Un fallo al
//! guardar se registra y no revierte la mutación en memoria: el estado
//! en memoria manda hasta la próxima escritura que funcione.

use serde_json::Value;
use tracing::error;

use crate::dto::board_dto::CurrentBoardResponse;
use crate::models::board::{Board, BoardData};
use crate::models::route::Route;
use crate::persistence::PersistenceManager;
use crate::services::asset_service::AssetManager;
use crate::utils::errors::{AppError, AppResult};

pub struct BoardService {
    data: BoardData,
    persistence: PersistenceManager,
    assets: AssetManager,
}

impl BoardService {
    pub fn new(data: BoardData, persistence: PersistenceManager, assets: AssetManager) -> Self {
        Self {
            data,
            persistence,
            assets,
        }
    }

    /// Documento completo, para `GET /api/data`
    pub fn document(&self) -> &BoardData {
        &self.data
    }

    /// Board actual (o null) más sus rutas
    pub fn current_view(&self) -> CurrentBoardResponse {
        match self.data.current_board.as_deref() {
            None => CurrentBoardResponse {
                board: None,
                routes: Vec::new(),
            },
            Some(id) => CurrentBoardResponse {
                board: self.data.current().cloned(),
                routes: self.data.routes_for(id),
            },
        }
    }

    /// Reemplazar en bloque las zonas del board actual
    pub fn set_zones(&mut self, zones: Vec<Value>) -> AppResult<()> {
        let board_id = self
            .data
            .current_board
            .clone()
            .ok_or(AppError::NoCurrentBoard)?;

        let board = self
            .data
            .boards
            .iter_mut()
            .find(|b| b.id == board_id)
            .ok_or(AppError::BoardNotFound)?;

        board.zones = zones;
        self.persist();
        Ok(())
    }

    /// Crear o actualizar una ruta del board actual.
    ///
    /// La identidad de una ruta es el par (name, boardId): si ya existe,
    /// se sobreescribe en sitio conservando su posición en la secuencia;
    /// si no, se añade al final.
    pub fn upsert_route(&mut self, name: String, zones: Vec<Value>) -> AppResult<()> {
        let board_id = self
            .data
            .current_board
            .clone()
            .ok_or(AppError::NoCurrentBoard)?;

        let route = Route::new(name, zones, board_id);

        if let Some(existing) = self
            .data
            .routes
            .iter_mut()
            .find(|r| r.name == route.name && r.board_id == route.board_id)
        {
            *existing = route;
        } else {
            self.data.routes.push(route);
        }

        self.persist();
        Ok(())
    }

    /// Borrar la ruta (name, board actual). No-op si no existe.
    pub fn delete_route(&mut self, name: &str) -> AppResult<()> {
        let board_id = self
            .data
            .current_board
            .clone()
            .ok_or(AppError::NoCurrentBoard)?;

        self.data
            .routes
            .retain(|r| !(r.name == name && r.board_id == board_id));

        self.persist();
        Ok(())
    }

    /// Guardar los bytes de una imagen subida y crear el board nuevo.
    ///
    /// Composición usada por el handler de subida: si la escritura del
    /// asset falla no se muta nada y el error sube como 500.
    pub fn upload_board_image(
        &mut self,
        bytes: &[u8],
        extension: Option<&str>,
    ) -> AppResult<Board> {
        let image_path = self.assets.store(bytes, extension)?;
        self.replace_current_board_image(image_path)
    }

    /// Crear un board nuevo para la imagen dada y dejarlo como actual.
    ///
    /// Si había un board seleccionado, su imagen se borra primero
    /// (best-effort) y el registro nuevo lo sustituye en la colección con
    /// un id fresco y zonas vacías. Las rutas del board antiguo conservan
    /// su boardId antiguo: quedan huérfanas pero no se borran.
    pub fn replace_current_board_image(&mut self, image_path: String) -> AppResult<Board> {
        let board = Board::new(image_path);

        match self.data.current_board.clone() {
            Some(current_id) => {
                if let Some(old) = self.data.boards.iter().find(|b| b.id == current_id) {
                    self.assets.remove(&old.image_path);
                }
                match self.data.boards.iter().position(|b| b.id == current_id) {
                    Some(idx) => self.data.boards[idx] = board.clone(),
                    None => self.data.boards.push(board.clone()),
                }
            }
            None => self.data.boards.push(board.clone()),
        }

        self.data.current_board = Some(board.id.clone());
        self.persist();
        Ok(board)
    }

    /// Borrar el board actual, su imagen y todas sus rutas.
    ///
    /// Idempotente: sin board seleccionado devuelve éxito sin tocar nada.
    pub fn delete_current_board(&mut self) -> AppResult<()> {
        let Some(current_id) = self.data.current_board.take() else {
            return Ok(());
        };

        if let Some(board) = self.data.boards.iter().find(|b| b.id == current_id) {
            self.assets.remove(&board.image_path);
        }

        self.data.boards.retain(|b| b.id != current_id);
        self.data.routes.retain(|r| r.board_id != current_id);

        self.persist();
        Ok(())
    }

    /// Reescribir el documento completo tras una mutación exitosa.
    ///
    /// Un fallo de escritura se registra y no se reintenta; el estado en
    /// memoria y el de disco pueden divergir hasta la próxima escritura
    /// que funcione.
    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.data) {
            error!(
                "❌ No se pudo guardar {}: {}",
                self.persistence.data_file().display(),
                e
            );
        }
    }
}

//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El store es un recurso mutable único:
//! cada mutación toma el write lock para la unidad completa
//! "validar → mutar → limpiar assets → guardar"; las consultas de sólo
//! lectura toman el read lock y pueden correr en paralelo.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::services::board_service::BoardService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<BoardService>>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: BoardService, config: EnvironmentConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}

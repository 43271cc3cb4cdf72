//! Servicios del sistema
//!
//! `board_service` es el único componente que muta el modelo en memoria;
//! `asset_service` gestiona el ciclo de vida de las imágenes subidas.

pub mod asset_service;
pub mod board_service;

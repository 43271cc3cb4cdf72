//! Board & Route Server
//!
//! Servidor de boards (imagen de referencia + zonas anotadas) y rutas
//! (selecciones ordenadas de zonas con nombre), persistidos como un
//! único documento JSON reescrito entero en cada mutación.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod persistence;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

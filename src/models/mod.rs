//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al documento JSON persistido en disco.

pub mod board;
pub mod route;

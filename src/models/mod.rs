//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod notification_model;
pub mod status_model;

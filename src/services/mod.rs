//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod notification_service;
pub mod status_service;
pub mod status_store;
pub mod whatsapp_dispatcher;

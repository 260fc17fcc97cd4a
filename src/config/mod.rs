//! config/mod.rs
//! Configuración del proceso, cargada una sola vez al arrancar.

pub mod app_config;

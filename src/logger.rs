//! logger.rs
//! Logger del servicio con env_logger. Nivel base `info`; hyper y reqwest se
//! quedan en `warn` salvo que RUST_LOG diga otra cosa.

use env_logger::Builder;
use log::LevelFilter;

pub fn init_logger() {
    let spec = std::env::var("RUST_LOG").ok();
    logger_builder(spec.as_deref()).init();
}

/// `spec` usa la sintaxis de RUST_LOG y se aplica encima de los defaults.
pub fn logger_builder(spec: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .format_timestamp_secs();

    if let Some(spec) = spec {
        builder.parse_filters(spec);
    }
    builder
}

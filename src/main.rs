use std::str::FromStr;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::app_config::{AppConfig, DatabaseConfig};
use crate::logger::init_logger;
use crate::services::notification_service::NotificationService;
use crate::services::status_service::StatusCheckService;
use crate::services::status_store::StatusStore;
use crate::services::whatsapp_dispatcher::dispatcher_from_config;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

fn pool_options(config: &DatabaseConfig) -> SqlitePoolOptions {
    if config.is_memory() {
        // En memoria cada conexión es una base distinta: una sola conexión y
        // nunca se recicla, o se pierde la colección.
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    SqlitePoolOptions::new().max_connections(5)
}

async fn setup_database(config: &DatabaseConfig) -> Result<Pool<Sqlite>> {
    // La carpeta del archivo SQLite tiene que existir antes de conectar
    if let Some(dir) = config.data_dir() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("No se pudo crear directorio {:?}", dir))?;
    }

    let db_url = config.connection_url();
    log::info!("Conectando a SQLite en {}", db_url);

    let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);

    let db_pool = pool_options(config)
        .connect_with(options)
        .await
        .context("No se pudo conectar a la base de datos SQLite")?;

    Ok(db_pool)
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env().context("Configuración inválida")?;

    let db_pool = setup_database(&config.database).await?;

    let status_store = StatusStore::new(db_pool.clone());
    status_store.run_migrations().await?;
    let status_service = StatusCheckService::new(status_store);

    let notification_service = NotificationService::new(
        dispatcher_from_config(&config.twilio),
        config.twilio.whatsapp_number.clone(),
    );

    let cors_origins = config.cors_origins.clone();

    log::info!("Levantando servidor en {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(app::build_cors(&cors_origins))
            .app_data(web::Data::new(status_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .configure(app::init_app)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    // Cerrar el pool al apagar
    db_pool.close().await;
    log::info!("Servidor detenido");
    Ok(())
}

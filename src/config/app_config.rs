//! config/app_config.rs
//! Configuración global del servicio construida desde variables de entorno
//! (o `.env` vía dotenv). Se construye una vez en `main` y se reparte a los servicios.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const DEFAULT_WHATSAPP_SENDER: &str = "whatsapp:+14155238886";
pub const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub twilio: TwilioConfig,
    /// Orígenes permitidos para CORS; `*` significa cualquiera.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Base de conexión, p.ej. `sqlite:data`
    pub url: String,
    /// Nombre del archivo de base de datos (sin extensión)
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub whatsapp_number: String,
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construye la config a partir de una función de búsqueda de variables.
    /// `DATABASE_URL` y `DB_NAME` son obligatorias; el resto tiene default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_empty("DATABASE_URL").ok_or_else(|| anyhow!("Falta DATABASE_URL"))?;
        let name = non_empty("DB_NAME").ok_or_else(|| anyhow!("Falta DB_NAME"))?;

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT inválido '{}': {}", raw, e))?,
            None => 8001,
        };

        let cors_origins = non_empty("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(AppConfig {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database: DatabaseConfig { url, name },
            twilio: TwilioConfig {
                account_sid: non_empty("TWILIO_ACCOUNT_SID"),
                auth_token: non_empty("TWILIO_AUTH_TOKEN"),
                whatsapp_number: non_empty("TWILIO_WHATSAPP_NUMBER")
                    .unwrap_or_else(|| DEFAULT_WHATSAPP_SENDER.to_string()),
                api_base: non_empty("TWILIO_API_BASE")
                    .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
            },
            cors_origins,
        })
    }
}

impl DatabaseConfig {
    pub fn is_memory(&self) -> bool {
        self.url == MEMORY_DATABASE_URL
    }

    /// URL final de conexión: `{url}/{name}.db`
    pub fn connection_url(&self) -> String {
        if self.is_memory() {
            return self.url.clone();
        }
        format!("{}/{}.db", self.url.trim_end_matches('/'), self.name)
    }

    /// Carpeta que contiene el archivo SQLite (hay que crearla antes de conectar).
    pub fn data_dir(&self) -> Option<PathBuf> {
        if self.is_memory() {
            return None;
        }
        let path = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(&self.url);
        Some(PathBuf::from(path))
    }
}

impl TwilioConfig {
    /// Credenciales sólo si ambas están presentes.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.account_sid, &self.auth_token) {
            (Some(sid), Some(token)) => Some((sid.as_str(), token.as_str())),
            _ => None,
        }
    }
}

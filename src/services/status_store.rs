//! services/status_store.rs
//! Colección de documentos `status_checks` sobre SQLite. Cada fila guarda un
//! documento JSON; el rowid es identidad interna y nunca sale en las lecturas.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Row, Sqlite};

use crate::models::status_model::StatusCheck;

#[derive(Clone, Debug)]
pub struct StatusStore {
    db_pool: Pool<Sqlite>,
}

/// Forma persistida del documento.
#[derive(Debug, Serialize, Deserialize)]
struct StatusDocument {
    id: String,
    client_name: String,
    timestamp: StoredTimestamp,
}

/// Los documentos nuevos siempre llevan el timestamp como string RFC 3339.
/// Filas legacy con epoch en milisegundos se aceptan en lectura.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Iso(String),
    EpochMillis(i64),
}

impl StoredTimestamp {
    fn to_datetime(&self) -> Result<DateTime<Utc>> {
        match self {
            StoredTimestamp::Iso(raw) => Ok(DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Timestamp inválido '{}'", raw))?
                .with_timezone(&Utc)),
            StoredTimestamp::EpochMillis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .ok_or_else(|| anyhow!("Timestamp epoch fuera de rango: {}", ms)),
        }
    }
}

impl StatusStore {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        StatusStore { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Fallo en migraciones de 'status_checks'")?;
        Ok(())
    }

    /// Inserta el documento. No hay chequeo de unicidad: el id es un UUID v4.
    pub async fn save(&self, record: &StatusCheck) -> Result<()> {
        let document = StatusDocument {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: StoredTimestamp::Iso(
                record.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        };
        let body = serde_json::to_string(&document).context("Fallo al serializar status_check")?;

        sqlx::query("INSERT INTO status_checks (document) VALUES (?1)")
            .bind(body)
            .execute(&self.db_pool)
            .await
            .context("Fallo al insertar status_check")?;

        log::info!("(status_store) status_check id={} guardado", record.id);
        Ok(())
    }

    /// Devuelve hasta `limit` documentos en el orden natural de la tabla.
    pub async fn list(&self, limit: u32) -> Result<Vec<StatusCheck>> {
        let rows = sqlx::query("SELECT document FROM status_checks ORDER BY rowid LIMIT ?1")
            .bind(i64::from(limit))
            .fetch_all(&self.db_pool)
            .await
            .context("Fallo al leer status_checks")?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let raw: String = row.try_get("document")?;
            let document: StatusDocument = serde_json::from_str(&raw)
                .with_context(|| format!("Documento status_check corrupto: {}", raw))?;
            result.push(StatusCheck {
                timestamp: document.timestamp.to_datetime()?,
                id: document.id,
                client_name: document.client_name,
            });
        }
        Ok(result)
    }
}

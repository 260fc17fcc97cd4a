//! tests/support.rs
//! Helpers compartidos: base en memoria y dispatchers de prueba.

use std::sync::Mutex;

use futures::future::BoxFuture;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::models::notification_model::WhatsAppMessageRequest;
use crate::services::status_store::StatusStore;
use crate::services::whatsapp_dispatcher::{
    DispatchError, DispatchReceipt, MessageDispatcher, OutboundMessage,
};

// Una sola conexión: cada conexión a :memory: abre una base distinta.
pub async fn memory_store() -> (Pool<Sqlite>, StatusStore) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    let store = StatusStore::new(pool.clone());
    store.run_migrations().await.expect("Migrations failed");
    (pool, store)
}

pub fn claim_request() -> WhatsAppMessageRequest {
    WhatsAppMessageRequest {
        to_number: "+6591234567".to_string(),
        claim_number: "CLM-2024-0042".to_string(),
        amount: "SGD 350.00".to_string(),
        flight_number: "SQ322".to_string(),
        traveller_name: "Tan Mei Ling".to_string(),
    }
}

/// Acepta todo y guarda lo que se le pidió enviar.
pub struct RecordingDispatcher {
    pub sid: String,
    pub sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingDispatcher {
    pub fn new(sid: &str) -> Self {
        Self {
            sid: sid.to_string(),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl MessageDispatcher for RecordingDispatcher {
    fn dispatch<'a>(
        &'a self,
        message: &'a OutboundMessage,
    ) -> BoxFuture<'a, Result<DispatchReceipt, DispatchError>> {
        Box::pin(async move {
            self.sent.lock().unwrap().push(message.clone());
            Ok(DispatchReceipt {
                sid: self.sid.clone(),
                mocked: false,
            })
        })
    }
}

/// Siempre rechaza como lo haría el proveedor.
pub struct FailingDispatcher {
    pub message: String,
}

impl MessageDispatcher for FailingDispatcher {
    fn dispatch<'a>(
        &'a self,
        _message: &'a OutboundMessage,
    ) -> BoxFuture<'a, Result<DispatchReceipt, DispatchError>> {
        Box::pin(async move {
            Err(DispatchError::Rejected {
                status: 400,
                message: self.message.clone(),
            })
        })
    }
}

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registro de status check: qué cliente contactó al servicio y cuándo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Genera id (UUID v4) y timestamp UTC. El timestamp se trunca a
    /// microsegundos, que es la precisión con la que se persiste.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Request para crear un status check. Campos extra se ignoran.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

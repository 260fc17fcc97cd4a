use serde::{Deserialize, Serialize};

/// Notificación de reclamo pagado a enviar por WhatsApp.
#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppMessageRequest {
    /// Número destino con código de país (p.ej. +6591234567)
    pub to_number: String,
    pub claim_number: String,
    pub amount: String,
    pub flight_number: String,
    pub traveller_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatsAppResponse {
    pub success: bool,
    pub message: String,
    pub message_sid: Option<String>,
}

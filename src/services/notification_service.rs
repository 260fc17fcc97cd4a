use std::sync::Arc;

use crate::{
    errors::AppError,
    models::notification_model::{WhatsAppMessageRequest, WhatsAppResponse},
    services::whatsapp_dispatcher::{MessageDispatcher, OutboundMessage},
};

#[derive(Clone)]
pub struct NotificationService {
    dispatcher: Arc<dyn MessageDispatcher>,
    /// Número remitente, ya con prefijo `whatsapp:`
    sender: String,
}

impl NotificationService {
    pub fn new(dispatcher: Arc<dyn MessageDispatcher>, sender: String) -> Self {
        Self { dispatcher, sender }
    }

    /// Envía la notificación de reclamo pagado. Un solo intento, sin reintentos.
    pub async fn send(&self, req: WhatsAppMessageRequest) -> Result<WhatsAppResponse, AppError> {
        let outbound = OutboundMessage {
            from: self.sender.clone(),
            to: format!("whatsapp:{}", req.to_number),
            body: format_claim_message(&req),
        };

        let receipt = match self.dispatcher.dispatch(&outbound).await {
            Ok(receipt) => receipt,
            Err(e) => {
                log::error!("Error sending WhatsApp message: {}", e);
                return Err(AppError::NotificationDispatch(e.to_string()));
            }
        };

        if receipt.mocked {
            return Ok(WhatsAppResponse {
                success: true,
                message: format!(
                    "Mock message sent (Twilio credentials not configured). Message would be: A new claim of {} has successfully been paid.",
                    req.amount
                ),
                message_sid: Some(receipt.sid),
            });
        }

        log::info!("WhatsApp message sent successfully. SID: {}", receipt.sid);
        Ok(WhatsAppResponse {
            success: true,
            message: "WhatsApp notification sent successfully".to_string(),
            message_sid: Some(receipt.sid),
        })
    }
}

pub fn format_claim_message(req: &WhatsAppMessageRequest) -> String {
    format!(
        "A new claim has successfully been paid.\n\
         \n\
         Claim Number: {}\n\
         Flight: {}\n\
         Traveller: {}\n\
         Amount Paid: {}\n\
         \n\
         Thank you for choosing Income Insurance!",
        req.claim_number, req.flight_number, req.traveller_name, req.amount
    )
}

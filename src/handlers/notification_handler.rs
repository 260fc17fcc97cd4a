use actix_web::{web, HttpResponse, ResponseError};

use crate::{
    models::notification_model::WhatsAppMessageRequest,
    services::notification_service::NotificationService,
};

/// POST /api/send-whatsapp
pub async fn send_whatsapp_endpoint(
    notification_service: web::Data<NotificationService>,
    body: web::Json<WhatsAppMessageRequest>,
) -> HttpResponse {
    match notification_service.send(body.into_inner()).await {
        Ok(resp) => HttpResponse::Ok().json(resp),
        // el service ya dejó el error en el log
        Err(e) => e.error_response(),
    }
}

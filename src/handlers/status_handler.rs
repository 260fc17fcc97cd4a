//! handlers/status_handler.rs
use actix_web::{web, HttpResponse, ResponseError};

use crate::models::status_model::StatusCheckCreate;
use crate::services::status_service::StatusCheckService;

/// POST /api/status
pub async fn create_status_endpoint(
    status_service: web::Data<StatusCheckService>,
    body: web::Json<StatusCheckCreate>,
) -> HttpResponse {
    match status_service.create(body.into_inner()).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => {
            log::error!("Error creando status_check: {}", e);
            e.error_response()
        }
    }
}

/// GET /api/status
pub async fn list_status_endpoint(status_service: web::Data<StatusCheckService>) -> HttpResponse {
    match status_service.list().await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            log::error!("Error listando status_checks: {}", e);
            e.error_response()
        }
    }
}

//! app.rs
use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;
use crate::handlers::{health_handler, notification_handler, status_handler};

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("", web::get().to(health_handler::root_endpoint))
            .route("/", web::get().to(health_handler::root_endpoint))
            .route(
                "/status",
                web::post().to(status_handler::create_status_endpoint),
            )
            .route("/status", web::get().to(status_handler::list_status_endpoint))
            .route(
                "/send-whatsapp",
                web::post().to(notification_handler::send_whatsapp_endpoint),
            ),
    );
}

/// Body JSON inválido o incompleto -> 422 con `detail`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::warn!("Request rechazado: {}", err);
        AppError::Validation(err.to_string()).into()
    })
}

/// CORS: lista de orígenes (o `*`), cualquier método y header, con credenciales.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

use actix_web::HttpResponse;
use serde_json::json;

/// GET /api/
pub async fn root_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

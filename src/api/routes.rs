// src/api/routes.rs
use actix_web::{error, web, HttpRequest, HttpResponse};
use super::handlers;
use crate::errors::PlaygroundError;
use crate::models::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(handlers::health_check))
            .route("/languages", web::get().to(handlers::list_languages))
            .route("/compile", web::post().to(handlers::compile)),
    );
}

/// Malformed bodies get the same `{ "message": ... }` shape as other rejected requests.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = PlaygroundError::InvalidRequest(err.to_string()).to_string();
    let response = HttpResponse::BadRequest().json(ApiError { message });
    error::InternalError::from_response(err, response).into()
}

// src/api/handlers/compile.rs
use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;
use crate::api::AppState;
use crate::executor::PistonExecutor;
use crate::models::{ApiError, CompileRequest};
use crate::providers::gemini::GeminiProvider;
use crate::runner;

/// POST /api/compile - Run code remotely and attach an AI fix when it fails
pub async fn compile(
    state: web::Data<AppState>,
    req: web::Json<CompileRequest>,
) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4().to_string();
    let request = req.into_inner();

    let executor = PistonExecutor::new(state.client.clone(), state.config.execution.clone());
    let fix_provider = state
        .config
        .gemini
        .clone()
        .map(|gemini| GeminiProvider::new(state.client.clone(), gemini));

    match runner::run_compile(&executor, fix_provider.as_ref(), &request, &request_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) if e.is_client_error() => {
            log::info!("[{}] Rejected request: {}", request_id, e);
            Ok(HttpResponse::BadRequest().json(ApiError { message: e.to_string() }))
        }
        Err(e) => {
            log::error!("[{}] Compile request failed: {}", request_id, e);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                message: "Something went wrong while running your code".to_string(),
            }))
        }
    }
}

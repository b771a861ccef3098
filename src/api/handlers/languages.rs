// src/api/handlers/languages.rs
use actix_web::{HttpResponse, Result};
use serde::Serialize;
use crate::languages::{Language, LANGUAGES};

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: &'static [Language],
}

/// GET /api/languages - Supported languages with runtime versions and starter snippets
pub async fn list_languages() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(LanguagesResponse { languages: LANGUAGES }))
}

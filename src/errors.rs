// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error("Could not read a fix from the model response: {0}")]
    FixParse(String),

    #[error("Language '{0}' is not supported")]
    UnsupportedLanguage(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlaygroundError {
    /// Errors caused by the caller's input rather than by an upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlaygroundError::UnsupportedLanguage(_) | PlaygroundError::InvalidRequest(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;

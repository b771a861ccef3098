// src/providers/gemini.rs

use reqwest::Client;
use serde_json::json;
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{PlaygroundError, Result};
use crate::providers::LlmProvider;

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }
}

impl LlmProvider for GeminiProvider {
    /// Calls the Gemini API with a given prompt and returns the model's response text and latency.
    async fn generate(&self, prompt: &str) -> Result<(String, u64)> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );

        log::info!("📡 Calling Gemini with model: {}", self.config.model);

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(PlaygroundError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_json: serde_json::Value = resp.json().await?;

        if let Some(error) = response_json.get("error") {
            return Err(PlaygroundError::ApiResponse(error.to_string()));
        }

        // One answer may arrive split across several parts.
        let output: String = response_json
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                    .collect()
            })
            .ok_or_else(|| PlaygroundError::UnexpectedResponse(response_json.to_string()))?;

        if output.trim().is_empty() {
            return Err(PlaygroundError::EmptyResponse);
        }

        Ok((output, latency_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn provider_for(server: &mockito::ServerGuard) -> GeminiProvider {
        GeminiProvider::new(
            Client::new(),
            GeminiConfig {
                api_base: server.url(),
                api_key: "test-key".to_string(),
                model: "gemini-1.5-flash".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_generate_returns_first_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{"content": {"parts": [{"text": "{\"explanation\":\"x\"}"}]}}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (text, _latency) = provider_for(&server).generate("fix it").await.unwrap();

        mock.assert_async().await;
        assert_eq!(text, "{\"explanation\":\"x\"}");
    }

    #[tokio::test]
    async fn test_generate_joins_split_parts() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{"content": {"parts": [
                        {"text": "{\"explanation\": \"x is undefined\", "},
                        {"text": "\"correctedCode\": \"x = 1\"}"}
                    ]}}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let (text, _latency) = provider_for(&server).generate("fix it").await.unwrap();
        assert_eq!(text, "{\"explanation\": \"x is undefined\", \"correctedCode\": \"x = 1\"}");
    }

    #[tokio::test]
    async fn test_generate_reports_http_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(403)
            .with_body("API key not valid")
            .create_async()
            .await;

        let err = provider_for(&server).generate("fix it").await.unwrap_err();
        assert!(matches!(err, PlaygroundError::ApiError { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_candidates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string())
            .create_async()
            .await;

        let err = provider_for(&server).generate("fix it").await.unwrap_err();
        assert!(matches!(err, PlaygroundError::UnexpectedResponse(_)));
    }
}

// src/executor.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ExecutionConfig;
use crate::errors::{PlaygroundError, Result};
use crate::languages::Language;

/// What came back from running a submission remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    /// Exit code of the last stage that ran. `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub signal: Option<String>,
    pub compile_failed: bool,
    pub latency_ms: u64,
}

impl ExecutionOutcome {
    /// A run failed when compilation failed or the program did not exit with `0`.
    pub fn is_failure(&self) -> bool {
        self.compile_failed || self.exit_code != Some(0)
    }

    /// The text handed to the fixer: stderr, or stdout when the runtime printed its error there.
    pub fn error_text(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// A remote service that compiles and runs source code.
pub trait CodeExecutor: Send + Sync {
    /// Runs `code` with the runtime described by `language`.
    fn execute(
        &self,
        language: &Language,
        code: &str,
    ) -> impl std::future::Future<Output = Result<ExecutionOutcome>> + Send;
}

/// Client for the Piston v2 execution API.
pub struct PistonExecutor {
    client: Client,
    config: ExecutionConfig,
}

#[derive(Serialize)]
struct PistonRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<PistonFile<'a>>,
}

#[derive(Serialize)]
struct PistonFile<'a> {
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct PistonResponse {
    run: Option<PistonStage>,
    compile: Option<PistonStage>,
    message: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct PistonStage {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
    code: Option<i32>,
    signal: Option<String>,
}

impl PistonExecutor {
    /// Creates a new `PistonExecutor`.
    pub fn new(client: Client, config: ExecutionConfig) -> Self {
        Self { client, config }
    }
}

impl CodeExecutor for PistonExecutor {
    async fn execute(&self, language: &Language, code: &str) -> Result<ExecutionOutcome> {
        let url = format!("{}/execute", self.config.api_base.trim_end_matches('/'));

        log::info!(
            "📡 Calling execution service: {} ({} {})",
            url,
            language.language,
            language.version
        );

        let body = PistonRequest {
            language: language.language,
            version: language.version,
            files: vec![PistonFile { content: code }],
        };

        let start = Instant::now();

        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Execution service response status: {} ({}ms)", status, latency_ms);

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

        let piston_resp: PistonResponse = resp.json().await?;
        outcome_from_response(piston_resp, latency_ms)
    }
}

/// Folds the compile and run stages into a single outcome.
fn outcome_from_response(resp: PistonResponse, latency_ms: u64) -> Result<ExecutionOutcome> {
    if let Some(compile) = resp.compile.as_ref().filter(|c| c.code != Some(0)) {
        let stderr = if compile.stderr.trim().is_empty() {
            compile.stdout.clone()
        } else {
            compile.stderr.clone()
        };
        return Ok(ExecutionOutcome {
            stdout: String::new(),
            stderr,
            exit_code: compile.code,
            signal: compile.signal.clone(),
            compile_failed: true,
            latency_ms,
        });
    }

    let run = match resp.run {
        Some(run) => run,
        None => {
            return Err(match resp.message {
                Some(message) => PlaygroundError::ApiResponse(message),
                None => PlaygroundError::UnexpectedResponse("missing run stage".to_string()),
            });
        }
    };

    Ok(ExecutionOutcome {
        stdout: run.stdout,
        stderr: run.stderr,
        exit_code: run.code,
        signal: run.signal,
        compile_failed: false,
        latency_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages;
    use mockito::Matcher;
    use serde_json::json;

    fn executor_for(server: &mockito::ServerGuard) -> PistonExecutor {
        PistonExecutor::new(
            Client::new(),
            ExecutionConfig {
                api_base: format!("{}/", server.url()),
            },
        )
    }

    #[tokio::test]
    async fn test_successful_run() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/execute")
            .match_body(Matcher::PartialJson(json!({
                "language": "python",
                "version": "3.10.0",
                "files": [{"content": "print('hi')"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "language": "python",
                    "version": "3.10.0",
                    "run": {"stdout": "hi\n", "stderr": "", "code": 0, "signal": null, "output": "hi\n"}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let python = languages::find("python").unwrap();
        let outcome = executor_for(&server).execute(python, "print('hi')").await.unwrap();

        mock.assert_async().await;
        assert_eq!(outcome.stdout, "hi\n");
        assert_eq!(outcome.exit_code, Some(0));
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_compile_failure_surfaces_compiler_output() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/execute")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "language": "c++",
                    "version": "10.2.0",
                    "compile": {"stdout": "", "stderr": "main.cpp:3:5: error: expected ';'", "code": 1, "signal": null}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let cpp = languages::find("cpp").unwrap();
        let outcome = executor_for(&server).execute(cpp, "int main() { return 0 }").await.unwrap();

        assert!(outcome.compile_failed);
        assert!(outcome.is_failure());
        assert_eq!(outcome.error_text(), "main.cpp:3:5: error: expected ';'");
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/execute")
            .with_status(400)
            .with_body(r#"{"message":"python-3.10.0 runtime is unknown"}"#)
            .create_async()
            .await;

        let python = languages::find("python").unwrap();
        let err = executor_for(&server).execute(python, "print(1)").await.unwrap_err();

        match err {
            PlaygroundError::ApiError { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("runtime is unknown"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_signal_counts_as_failure() {
        let resp = PistonResponse {
            run: Some(PistonStage {
                stdout: String::new(),
                stderr: String::new(),
                code: None,
                signal: Some("SIGKILL".to_string()),
            }),
            compile: None,
            message: None,
        };

        let outcome = outcome_from_response(resp, 12).unwrap();
        assert!(outcome.is_failure());
        assert_eq!(outcome.signal.as_deref(), Some("SIGKILL"));
    }

    #[test]
    fn test_missing_run_stage_reports_message() {
        let resp = PistonResponse {
            run: None,
            compile: None,
            message: Some("Too many requests".to_string()),
        };

        let err = outcome_from_response(resp, 0).unwrap_err();
        assert!(matches!(err, PlaygroundError::ApiResponse(m) if m == "Too many requests"));
    }

    #[test]
    fn test_error_text_falls_back_to_stdout() {
        let outcome = ExecutionOutcome {
            stdout: "Traceback: boom".to_string(),
            stderr: "  ".to_string(),
            exit_code: Some(1),
            signal: None,
            compile_failed: false,
            latency_ms: 0,
        };
        assert_eq!(outcome.error_text(), "Traceback: boom");
    }
}

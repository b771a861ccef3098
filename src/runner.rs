// src/runner.rs
use crate::errors::{PlaygroundError, Result};
use crate::executor::CodeExecutor;
use crate::fixer;
use crate::languages;
use crate::models::{CompileRequest, CompileResponse};
use crate::providers::LlmProvider;
use std::time::Instant;

/// Runs one submission and, if it fails, asks the model for a fix.
///
/// Only problems reaching the execution service are returned as errors. A
/// failing fix request is logged and the run result is returned without a fix.
pub async fn run_compile<E, P>(
    executor: &E,
    fix_provider: Option<&P>,
    request: &CompileRequest,
    request_id: &str,
) -> Result<CompileResponse>
where
    E: CodeExecutor,
    P: LlmProvider,
{
    if request.code.trim().is_empty() {
        return Err(PlaygroundError::InvalidRequest("code must not be empty".to_string()));
    }
    let language = languages::find(&request.language)?;
    let start = Instant::now();

    log::info!(
        "🎯 [{}] Running {} bytes of {} {}",
        request_id,
        request.code.len(),
        language.language,
        language.version
    );

    let outcome = executor.execute(language, &request.code).await?;

    if !outcome.is_failure() {
        log::info!(
            "✅ [{}] Run succeeded in {}ms (execution service {}ms)",
            request_id,
            start.elapsed().as_millis(),
            outcome.latency_ms
        );
        return Ok(CompileResponse::from_outcome(outcome, None));
    }

    log::info!(
        "❌ [{}] Run failed in {}ms (exit code {:?}, signal {:?}, compile failed: {})",
        request_id,
        outcome.latency_ms,
        outcome.exit_code,
        outcome.signal,
        outcome.compile_failed
    );

    let ai_fix = match fix_provider {
        Some(provider) => {
            match fixer::request_fix(provider, language.language, &request.code, outcome.error_text()).await {
                Ok(fix) => Some(fix),
                Err(e) => {
                    log::warn!("⚠️  [{}] AI fix unavailable: {}", request_id, e);
                    None
                }
            }
        }
        None => {
            log::debug!("[{}] No AI provider configured, skipping fix", request_id);
            None
        }
    };

    log::info!(
        "⏱️  [{}] Total request time: {}ms",
        request_id,
        start.elapsed().as_millis()
    );

    Ok(CompileResponse::from_outcome(outcome, ai_fix))
}

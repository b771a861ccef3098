// src/models.rs
use crate::executor::ExecutionOutcome;
use crate::fixer::AiFix;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/compile`.
#[derive(Deserialize, Clone, Debug)]
pub struct CompileRequest {
    pub code: String,
    pub language: String,
}

/// The envelope returned to the editor for every completed run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    pub error: bool,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub ai_fix: Option<AiFix>,
}

impl CompileResponse {
    pub fn from_outcome(outcome: ExecutionOutcome, ai_fix: Option<AiFix>) -> Self {
        let error = outcome.is_failure();
        Self {
            error,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
            exit_code: outcome.exit_code,
            ai_fix: if error { ai_fix } else { None },
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiError {
    pub message: String,
}

// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;

/// A common trait for generative model backends used to explain and fix failing code.
pub trait LlmProvider: Send + Sync {
    /// Generates a response from the model based on a given prompt.
    ///
    /// # Returns
    /// A `Result` containing a tuple of the generated `String` and the latency in milliseconds (`u64`).
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<(String, u64)>> + Send;
}

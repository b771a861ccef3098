// src/fixer.rs
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::errors::{PlaygroundError, Result};
use crate::providers::LlmProvider;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)\s*```").expect("fence pattern is valid"));

/// The explanation and corrected source suggested by the model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiFix {
    pub explanation: String,
    #[serde(alias = "corrected_code")]
    pub corrected_code: String,
}

/// Builds the debugging prompt for a failed run.
pub fn create_fix_prompt(language: &str, code: &str, error: &str) -> String {
    format!(
        r#"You are an expert {language} debugger.

The following {language} code failed to run.

CODE:
{code}

ERROR:
{error}

INSTRUCTIONS:
1. Explain the cause of the error in one or two plain sentences
2. Provide the complete corrected program, not a fragment
3. Respond with ONLY a JSON object of the form:
{{"explanation": "...", "correctedCode": "..."}}"#
    )
}

/// Reads an `AiFix` out of free model text.
///
/// Accepts bare JSON, JSON wrapped in a markdown fence (with or without a
/// language tag), JSON next to other fenced code and JSON surrounded by prose.
pub fn parse_fix_response(response: &str) -> Result<AiFix> {
    let trimmed = response.trim();

    let fenced = FENCED_BLOCK
        .captures_iter(trimmed)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    // A fence inside `correctedCode` cuts the capture short, so the whole text is tried last.
    fenced
        .chain(std::iter::once(trimmed))
        .find_map(first_fix_in)
        .ok_or_else(|| PlaygroundError::FixParse("no fix object in model response".to_string()))
}

/// Tries every `{` in `text` as the start of an `AiFix` object, ignoring trailing text.
fn first_fix_in(text: &str) -> Option<AiFix> {
    text.match_indices('{').find_map(|(start, _)| {
        let tail = &text[start..];
        parse_leading_fix(tail).or_else(|| parse_leading_fix(&escape_raw_control_chars(tail)))
    })
}

fn parse_leading_fix(text: &str) -> Option<AiFix> {
    serde_json::Deserializer::from_str(text)
        .into_iter::<AiFix>()
        .next()?
        .ok()
}

/// Models often put literal newlines and tabs inside JSON strings; escape them.
fn escape_raw_control_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            match c {
                _ if escaped => {
                    escaped = false;
                    out.push(c);
                }
                '\\' => {
                    escaped = true;
                    out.push(c);
                }
                '"' => {
                    in_string = false;
                    out.push(c);
                }
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        } else {
            if c == '"' {
                in_string = true;
            }
            out.push(c);
        }
    }

    out
}

/// Asks the model to explain and fix a failed run.
pub async fn request_fix<P: LlmProvider>(
    provider: &P,
    language: &str,
    code: &str,
    error: &str,
) -> Result<AiFix> {
    let prompt = create_fix_prompt(language, code, error);
    let (response, latency_ms) = provider.generate(&prompt).await?;
    log::debug!("AI fix response ({}ms): {}", latency_ms, response);
    parse_fix_response(&response)
}

//! Turning a chat reply into an [`AnalysisResult`].

use std::sync::LazyLock;

use regex::Regex;
use wavelength_core::AnalysisResult;

use crate::error::StrategyError;

static FENCED_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("valid regex"));

/// Returns the JSON text inside the first triple-backtick block (optionally
/// tagged `json`), or the whole reply when there is none. Always trimmed.
#[must_use]
pub fn extract_json_payload(raw: &str) -> &str {
    FENCED_BLOCK_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str())
        .trim()
}

/// Parses a chat reply into the strategy document.
///
/// # Errors
///
/// Returns [`StrategyError::Unparseable`] if the extracted payload is not a
/// JSON object matching the document shape. Individual missing fields are
/// not errors.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, StrategyError> {
    serde_json::from_str(extract_json_payload(raw)).map_err(|source| {
        tracing::error!(error = %source, reply_len = raw.len(), "failed to parse AI response");
        StrategyError::Unparseable { source }
    })
}

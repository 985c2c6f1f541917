//! `export`: re-render a result saved by `analyze --format json` or by a
//! client of the HTTP API.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use wavelength_core::{AnalysisEnvelope, AnalysisResult};
use wavelength_report::Section;

use crate::output::{render, write_output, OutputFormat};

/// Reads either an analyze envelope or a bare result.
///
/// # Errors
///
/// Returns an error if the text is not JSON, does not match either shape, or
/// is a failure envelope.
pub(crate) fn read_result(raw: &str) -> anyhow::Result<AnalysisResult> {
    let value: Value = serde_json::from_str(raw).context("input is not valid JSON")?;

    if value.get("success").is_some() {
        let envelope: AnalysisEnvelope =
            serde_json::from_value(value).context("input is not an analyze envelope")?;
        return envelope
            .into_result()
            .map_err(|message| anyhow::anyhow!("saved analysis failed: {message}"));
    }

    serde_json::from_value(value).context("input is not an analysis result")
}

/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the output
/// cannot be rendered or written.
pub(crate) fn run_export(
    input: &Path,
    format: OutputFormat,
    section: Option<Section>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let result = read_result(&raw)?;
    tracing::debug!(
        input = %input.display(),
        icps = result.icps.len(),
        "loaded saved result"
    );

    let rendered = render(&result, format, section)?;
    write_output(&rendered, output)
}

//! Rendering and writing of a finished result.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use wavelength_core::{AnalysisEnvelope, AnalysisResult};
use wavelength_report::{format_full_report, format_section, generate_report_csv, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Spreadsheet export
    Csv,
    /// Analyze envelope, readable by `export`
    Json,
}

/// Renders `result` in `format`, optionally narrowed to one text section.
///
/// # Errors
///
/// Returns an error if a section is requested for a non-text format, if the
/// result has nothing for the requested section, or if serialisation fails.
pub(crate) fn render(
    result: &AnalysisResult,
    format: OutputFormat,
    section: Option<Section>,
) -> anyhow::Result<String> {
    if section.is_some() && format != OutputFormat::Text {
        anyhow::bail!("--section applies to text output only");
    }

    match format {
        OutputFormat::Text => match section {
            Some(section) => format_section(result, section)
                .ok_or_else(|| anyhow::anyhow!("result has no {section} section")),
            None => Ok(format_full_report(result)),
        },
        OutputFormat::Csv => Ok(generate_report_csv(result)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&AnalysisEnvelope::success(
            result.clone(),
        ))?),
    }
}

/// Writes `content` to `path`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None if content.ends_with('\n') => print!("{content}"),
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_result() -> AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "websiteAnalysis": {"valueProposition": "Ship faster", "confidence": "medium"},
            "icps": [{"name": "Founders", "type": "primary"}],
            "targetingStrategy": {"platform": "meta", "keywords": ["hidden"]},
            "adCopy": [{"audienceSegment": "Founders", "platformFormat": "Feed", "ads": [{"headline": "Go"}]}]
        }))
        .expect("fixture parses")
    }

    #[test]
    fn text_without_section_is_full_report() {
        let text = render(&meta_result(), OutputFormat::Text, None).expect("render");
        assert!(text.starts_with("📊 WEBSITE ANALYSIS"));
        assert!(text.contains("📝 AD COPY"));
    }

    #[test]
    fn text_section_is_narrowed() {
        let text =
            render(&meta_result(), OutputFormat::Text, Some(Section::Icps)).expect("render");
        assert!(text.starts_with("👥 IDEAL CUSTOMER PROFILES"));
        assert!(!text.contains("AD COPY"));
    }

    #[test]
    fn missing_targeting_section_is_an_error() {
        let result = AnalysisResult {
            targeting_strategy: None,
            ..meta_result()
        };
        let err = render(&result, OutputFormat::Text, Some(Section::Targeting))
            .expect_err("no targeting section");
        assert_eq!(err.to_string(), "result has no targeting section");
    }

    #[test]
    fn section_with_csv_is_rejected() {
        let err = render(&meta_result(), OutputFormat::Csv, Some(Section::AdCopy))
            .expect_err("csv has no sections");
        assert!(err.to_string().contains("text output only"));
    }

    #[test]
    fn json_output_is_a_success_envelope() {
        let json = render(&meta_result(), OutputFormat::Json, None).expect("render");
        let envelope: AnalysisEnvelope = serde_json::from_str(&json).expect("envelope");
        assert_eq!(envelope.into_result().expect("success"), meta_result());
    }

    #[test]
    fn csv_output_starts_with_analysis_table() {
        let csv = render(&meta_result(), OutputFormat::Csv, None).expect("render");
        assert!(csv.starts_with("Section,Field,Value\n"));
    }
}

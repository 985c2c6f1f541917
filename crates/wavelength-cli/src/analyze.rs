//! `analyze`: full validation, scrape, generate, render.

use std::path::Path;

use wavelength_core::{load_api_keys, AnalysisStep, AppConfig, RawAnalysisInput};
use wavelength_report::Section;
use wavelength_strategist::Providers;

use crate::output::{render, write_output, OutputFormat};

/// Form fields as given on the command line.
#[derive(Debug)]
pub(crate) struct AnalyzeRequest {
    pub url: String,
    pub description: String,
    pub platform: String,
    pub brand_voice: Option<String>,
}

impl From<AnalyzeRequest> for RawAnalysisInput {
    fn from(req: AnalyzeRequest) -> Self {
        Self {
            website_url: Some(req.url),
            product_description: Some(req.description),
            platform: Some(req.platform),
            brand_voice: req.brand_voice,
        }
    }
}

/// Run one analysis and write the rendered result.
///
/// Progress lines go to stderr so stdout carries only the report.
///
/// # Errors
///
/// Returns an error if validation fails, a provider key is missing, either
/// provider call fails, or the output cannot be rendered or written. Nothing
/// is fetched unless validation and key lookup both succeed.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    request: AnalyzeRequest,
    format: OutputFormat,
    section: Option<Section>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let input = RawAnalysisInput::from(request).validate()?;
    let keys = load_api_keys(|key| std::env::var(key).ok())?;
    let providers = Providers::from_config(config, &keys)?;

    let result = providers
        .run(&input, |step: AnalysisStep| {
            if let Some(message) = step.message() {
                eprintln!("{message}");
            }
        })
        .await?;

    let rendered = render(&result, format, section)?;
    write_output(&rendered, output)
}

//! Scrape-then-generate orchestration for a single analysis request.
//!
//! The two provider calls are strictly sequential. Progress is reported
//! through an observer callback as each stage actually begins.

use thiserror::Error;
use wavelength_core::{
    load_api_keys, AnalysisInput, AnalysisResult, AnalysisStep, ApiKeys, AppConfig, ConfigError,
    InputError, RawAnalysisInput,
};
use wavelength_scraper::{FirecrawlClient, ScrapeError};

use crate::client::StrategyClient;
use crate::error::StrategyError;
use crate::parse::parse_analysis;

/// Scraped content shorter than this is not worth sending to the generator.
pub const MIN_CONTENT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(
        "Could not extract enough content from the website. Please check the URL and try again."
    )]
    InsufficientContent { length: usize },

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

impl AnalysisError {
    /// Whether the failure is the caller's to fix rather than a provider or
    /// configuration fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::Input(_) | AnalysisError::InsufficientContent { .. }
        )
    }
}

/// The two provider clients for one request.
pub struct Providers {
    pub scraper: FirecrawlClient,
    pub strategist: StrategyClient,
}

impl Providers {
    /// Builds both clients from process config and per-request keys.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Scrape`] or [`AnalysisError::Strategy`] if a
    /// client cannot be constructed (bad base URL, TLS backend failure).
    pub fn from_config(config: &AppConfig, keys: &ApiKeys) -> Result<Self, AnalysisError> {
        let scraper = FirecrawlClient::with_base_url(
            &keys.firecrawl,
            config.request_timeout_secs,
            &config.user_agent,
            &config.firecrawl_base_url,
        )?;
        let strategist = StrategyClient::with_base_url(
            &keys.ai_gateway,
            &config.ai_model,
            config.request_timeout_secs,
            &config.user_agent,
            &config.ai_gateway_base_url,
        )?;
        Ok(Self {
            scraper,
            strategist,
        })
    }

    /// Runs scrape then generate for an already-checked input.
    ///
    /// `on_step` sees `Scraping` while the page is fetched, `Analyzing` while
    /// the extracted content is checked, and `Generating` for the whole
    /// gateway call and reply parse, then exactly one of `Complete` or
    /// `Error`.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage's error. The generator is not called
    /// when fewer than [`MIN_CONTENT_CHARS`] characters were extracted.
    pub async fn run<F>(
        &self,
        input: &AnalysisInput,
        mut on_step: F,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        F: FnMut(AnalysisStep),
    {
        let outcome = self.run_stages(input, &mut on_step).await;
        match &outcome {
            Ok(_) => {
                tracing::info!(url = %input.website_url, "analysis complete");
                on_step(AnalysisStep::Complete);
            }
            Err(e) => {
                tracing::error!(url = %input.website_url, error = %e, "analysis failed");
                on_step(AnalysisStep::Error);
            }
        }
        outcome
    }

    async fn run_stages<F>(
        &self,
        input: &AnalysisInput,
        on_step: &mut F,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        F: FnMut(AnalysisStep),
    {
        tracing::info!(url = %input.website_url, platform = %input.platform, "starting analysis");

        on_step(AnalysisStep::Scraping);
        let content = self.scraper.scrape_markdown(&input.website_url).await?;

        on_step(AnalysisStep::Analyzing);
        let length = content.chars().count();
        if length < MIN_CONTENT_CHARS {
            tracing::warn!(url = %input.website_url, length, "insufficient content extracted");
            return Err(AnalysisError::InsufficientContent { length });
        }

        on_step(AnalysisStep::Generating);
        let reply = self.strategist.complete(input, &content).await?;
        Ok(parse_analysis(&reply)?)
    }
}

/// Full request handling as exposed over HTTP: presence and field checks
/// with URL normalisation, per-request key resolution, then
/// [`Providers::run`]. No provider is contacted unless the input is valid and
/// both keys are present.
///
/// # Errors
///
/// See [`AnalysisError`].
pub async fn run_analysis<L, F>(
    config: &AppConfig,
    raw: RawAnalysisInput,
    lookup: L,
    on_step: F,
) -> Result<AnalysisResult, AnalysisError>
where
    L: Fn(&str) -> Option<String>,
    F: FnMut(AnalysisStep),
{
    let input = raw.require_valid()?;
    let keys = load_api_keys(lookup)?;
    let providers = Providers::from_config(config, &keys)?;
    providers.run(&input, on_step).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_input_and_thin_content() {
        assert!(AnalysisError::Input(InputError::MissingFields).is_client_error());
        assert!(AnalysisError::InsufficientContent { length: 3 }.is_client_error());
        assert!(!AnalysisError::Strategy(StrategyError::RateLimited).is_client_error());
        assert!(!AnalysisError::Config(ConfigError::MissingApiKey {
            provider: "Firecrawl"
        })
        .is_client_error());
    }

    #[test]
    fn messages_pass_through_unchanged() {
        assert_eq!(
            AnalysisError::Input(InputError::MissingFields).to_string(),
            "Missing required fields"
        );
        assert_eq!(
            AnalysisError::Strategy(StrategyError::QuotaExhausted).to_string(),
            "AI usage limit reached. Please add credits to continue."
        );
    }
}

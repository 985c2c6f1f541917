use std::time::{Duration, Instant};

use reqwest::{Client, Url};
use wavelength_core::{AnalysisInput, AnalysisResult};

use crate::error::StrategyError;
use crate::parse::parse_analysis;
use crate::prompt::{system_prompt, user_prompt};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Client for an OpenAI-compatible chat-completion gateway.
///
/// Sends one non-streaming request per call and never retries.
pub struct StrategyClient {
    client: Client,
    api_key: String,
    base_url: Url,
    model: String,
}

impl StrategyClient {
    /// # Errors
    ///
    /// Returns [`StrategyError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`StrategyError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, StrategyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| StrategyError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            model: model.to_owned(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates the strategy document for `input` from the scraped `content`.
    ///
    /// # Errors
    ///
    /// Any [`StrategyError`]; see [`StrategyClient::complete`] and
    /// [`parse_analysis`].
    pub async fn generate(
        &self,
        input: &AnalysisInput,
        content: &str,
    ) -> Result<AnalysisResult, StrategyError> {
        let reply = self.complete(input, content).await?;
        tracing::info!(reply_len = reply.len(), "AI response received, parsing JSON");
        parse_analysis(&reply)
    }

    /// Sends the system and user prompts and returns the raw reply text.
    ///
    /// # Errors
    ///
    /// - [`StrategyError::RateLimited`] on 429, [`StrategyError::QuotaExhausted`]
    ///   on 402, [`StrategyError::Upstream`] on any other non-2xx.
    /// - [`StrategyError::Http`] on network failure or timeout.
    /// - [`StrategyError::Envelope`] if a 2xx body is not a completion object.
    /// - [`StrategyError::EmptyResponse`] if the first choice has no content.
    pub async fn complete(
        &self,
        input: &AnalysisInput,
        content: &str,
    ) -> Result<String, StrategyError> {
        let request = ChatRequest::new(&self.model)
            .message(ChatMessage::system(system_prompt()))
            .message(ChatMessage::user(user_prompt(input, content)));
        self.send(&request).await
    }

    /// POSTs `request` and returns the first choice's text.
    async fn send(&self, request: &ChatRequest) -> Result<String, StrategyError> {
        let endpoint = self.completions_url()?;
        let start = Instant::now();
        tracing::info!(model = %request.model, "calling AI for analysis");

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "AI gateway error");
            return Err(StrategyError::from_status(status.as_u16(), body));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|source| StrategyError::Envelope { source })?;

        tracing::debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        parsed.into_content().ok_or(StrategyError::EmptyResponse)
    }

    fn completions_url(&self) -> Result<Url, StrategyError> {
        self.base_url
            .join("v1/chat/completions")
            .map_err(|e| StrategyError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

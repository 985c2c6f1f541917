use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScrapeError;
use crate::types::{ScrapeRequest, ScrapeResponse};

const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev/";

/// Upper bound on extracted characters handed to the generator prompt.
pub const MAX_CONTENT_CHARS: usize = 15_000;

/// Client for Firecrawl's single-page scrape endpoint.
///
/// One call per request: failures are surfaced immediately, never retried.
pub struct FirecrawlClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl FirecrawlClient {
    /// Creates a client pointed at the hosted Firecrawl API.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (self-hosted Firecrawl, or a
    /// wiremock server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ScrapeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ScrapeError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the main content of `url` as markdown, truncated to
    /// [`MAX_CONTENT_CHARS`] characters.
    ///
    /// A successful response without markdown yields an empty string; the
    /// caller decides whether that is enough content.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Provider`] on a non-2xx status, carrying the
    ///   provider's `error` message or `"Failed to scrape website: <status>"`.
    /// - [`ScrapeError::Http`] on network failure or timeout.
    /// - [`ScrapeError::Deserialize`] if a 2xx body is not valid JSON.
    pub async fn scrape_markdown(&self, url: &str) -> Result<String, ScrapeError> {
        let endpoint = self.scrape_url()?;
        tracing::info!(url, "scraping website");

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .json(&ScrapeRequest::markdown(url))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = provider_error_message(&body)
                .unwrap_or_else(|| format!("Failed to scrape website: {}", status.as_u16()));
            tracing::error!(
                url,
                status = status.as_u16(),
                error = %message,
                "firecrawl scrape failed"
            );
            return Err(ScrapeError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ScrapeResponse =
            serde_json::from_str(&body).map_err(|source| ScrapeError::Deserialize { source })?;
        tracing::debug!(url, title = parsed.title().unwrap_or_default(), "page metadata");
        let markdown = parsed.into_markdown();
        tracing::info!(url, length = markdown.chars().count(), "scraped content");

        Ok(truncate_chars(&markdown, MAX_CONTENT_CHARS).to_owned())
    }

    fn scrape_url(&self) -> Result<Url, ScrapeError> {
        self.base_url
            .join("v1/scrape")
            .map_err(|e| ScrapeError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Pulls the `error` string out of a provider error body, if it has one.
fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ScrapeResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|m| !m.trim().is_empty())
}

/// Returns the prefix of `text` holding at most `max_chars` characters,
/// always cut on a character boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

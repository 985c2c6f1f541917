//! Firecrawl `/v1/scrape` request and response types.
//!
//! ## Observed response shape
//!
//! Success responses wrap the page in `data`:
//! `{"success": true, "data": {"markdown": "...", "metadata": {...}}}`.
//! Some self-hosted deployments return `markdown` at the top level instead,
//! so both locations are modelled. Failures carry a human-readable `error`
//! string alongside a non-2xx status.

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/scrape`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: &'a [&'a str],
    pub only_main_content: bool,
}

impl<'a> ScrapeRequest<'a> {
    /// Main-content markdown for `url`.
    #[must_use]
    pub fn markdown(url: &'a str) -> Self {
        Self {
            url,
            formats: &["markdown"],
            only_main_content: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScrapeResponse {
    pub data: Option<ScrapeData>,
    pub markdown: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub metadata: Option<PageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub title: Option<String>,
}

impl ScrapeResponse {
    /// Page title from the provider's metadata, when present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.metadata.as_ref())
            .and_then(|m| m.title.as_deref())
    }

    /// Markdown from `data.markdown`, falling back to top-level `markdown`,
    /// else empty.
    #[must_use]
    pub fn into_markdown(self) -> String {
        self.data
            .and_then(|d| d.markdown)
            .or(self.markdown)
            .unwrap_or_default()
    }
}

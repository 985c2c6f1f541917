use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or TLS failure before a response was received.
    #[error("Failed to scrape website: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx from the provider. `message` is the provider's own error text
    /// when it sent one.
    #[error("{message}")]
    Provider { status: u16, message: String },

    #[error("Failed to scrape website: unreadable response ({source})")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Firecrawl base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ScrapeError {
    /// HTTP status reported by the provider, if the failure came with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Provider { status, .. } => Some(*status),
            ScrapeError::Http(e) => e.status().map(|s| s.as_u16()),
            ScrapeError::Deserialize { .. } | ScrapeError::InvalidBaseUrl { .. } => None,
        }
    }
}

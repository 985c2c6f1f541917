use thiserror::Error;

/// Failures of the strategy generator. Display strings are the user-facing
/// messages returned in the failure envelope.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("AI usage limit reached. Please add credits to continue.")]
    QuotaExhausted,

    #[error("AI analysis failed. Please try again.")]
    Upstream { status: u16, body: String },

    #[error("AI analysis failed. Please try again.")]
    Http(#[from] reqwest::Error),

    #[error("AI analysis failed. Please try again.")]
    Envelope {
        #[source]
        source: serde_json::Error,
    },

    #[error("No response from AI")]
    EmptyResponse,

    #[error("Failed to parse AI response. Please try again.")]
    Unparseable {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid AI gateway base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl StrategyError {
    /// Maps a non-2xx gateway status to its error.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            429 => StrategyError::RateLimited,
            402 => StrategyError::QuotaExhausted,
            _ => StrategyError::Upstream { status, body },
        }
    }
}

use std::fmt;

use serde::Serialize;

/// Stage of a single analysis request.
///
/// Transitions are linear: `Scraping → Analyzing → Generating →
/// Complete`, with `Error` reachable from any in-flight stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStep {
    Scraping,
    Analyzing,
    Generating,
    Complete,
    Error,
}

impl AnalysisStep {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisStep::Scraping => "scraping",
            AnalysisStep::Analyzing => "analyzing",
            AnalysisStep::Generating => "generating",
            AnalysisStep::Complete => "complete",
            AnalysisStep::Error => "error",
        }
    }

    /// Status line shown while the step is in flight.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            AnalysisStep::Scraping => Some("Fetching website content..."),
            AnalysisStep::Analyzing => Some("Analyzing your product & market..."),
            AnalysisStep::Generating => Some("Crafting your marketing strategy..."),
            AnalysisStep::Complete | AnalysisStep::Error => None,
        }
    }

    #[must_use]
    pub fn is_in_flight(self) -> bool {
        self.message().is_some()
    }
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

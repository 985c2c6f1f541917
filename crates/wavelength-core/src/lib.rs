//! Shared contract types, input validation, and configuration for Wavelength.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod input;
pub mod lenient;
pub mod platform;
pub mod progress;

use thiserror::Error;

pub use analysis::{
    AdCopy, AdVariation, AnalysisEnvelope, AnalysisResult, AudiencePriority, AudienceType,
    BudgetRecommendation, BuyerAwareness, Confidence, Demographics, FunnelStage, Icp, IcpType,
    LinkedinTargeting, Psychographics, SearchAdGroup, SearchAsset, TargetingStrategy,
    WebsiteAnalysis, DESCRIPTION_CHAR_LIMIT, HEADLINE_CHAR_LIMIT,
};
pub use app_config::{ApiKeys, AppConfig, Environment};
pub use config::{load_api_keys, load_app_config, load_app_config_from_env};
pub use input::{normalize_url, AnalysisInput, FieldError, InputError, RawAnalysisInput};
pub use platform::Platform;
pub use progress::AnalysisStep;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("{provider} API key not configured")]
    MissingApiKey { provider: &'static str },
}

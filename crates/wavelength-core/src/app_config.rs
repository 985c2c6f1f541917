use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-level settings. Provider API keys are not stored here; they are
/// resolved per request through [`crate::load_api_keys`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub firecrawl_base_url: String,
    pub ai_gateway_base_url: String,
    pub ai_model: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

/// Provider credentials for one request.
#[derive(Clone)]
pub struct ApiKeys {
    pub firecrawl: String,
    pub ai_gateway: String,
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("firecrawl", &"[redacted]")
            .field("ai_gateway", &"[redacted]")
            .finish()
    }
}

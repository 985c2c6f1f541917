use crate::app_config::{ApiKeys, AppConfig, Environment};
use crate::ConfigError;

pub const FIRECRAWL_API_KEY_VAR: &str = "FIRECRAWL_API_KEY";
pub const AI_GATEWAY_API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";

pub const DEFAULT_FIRECRAWL_BASE_URL: &str = "https://api.firecrawl.dev";
pub const DEFAULT_AI_GATEWAY_BASE_URL: &str = "https://ai.gateway.lovable.dev";
pub const DEFAULT_AI_MODEL: &str = "google/gemini-3-flash-preview";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Resolve both provider API keys through `lookup`.
///
/// Called at request time so a key rotated in the environment is picked up
/// without a restart. Blank values count as missing.
///
/// # Errors
///
/// Returns [`ConfigError::MissingApiKey`] naming the first provider whose key
/// is absent.
pub fn load_api_keys<F>(lookup: F) -> Result<ApiKeys, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |var: &str, provider: &'static str| -> Result<String, ConfigError> {
        lookup(var)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey { provider })
    };

    Ok(ApiKeys {
        firecrawl: require(FIRECRAWL_API_KEY_VAR, "Firecrawl")?,
        ai_gateway: require(AI_GATEWAY_API_KEY_VAR, "AI gateway")?,
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("WAVELENGTH_ENV", "development"))?;
    let bind_addr = parse_addr("WAVELENGTH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("WAVELENGTH_LOG_LEVEL", "info");

    let firecrawl_base_url = or_default("FIRECRAWL_BASE_URL", DEFAULT_FIRECRAWL_BASE_URL);
    let ai_gateway_base_url = or_default("AI_GATEWAY_BASE_URL", DEFAULT_AI_GATEWAY_BASE_URL);
    let ai_model = or_default("AI_MODEL", DEFAULT_AI_MODEL);

    let request_timeout_secs = parse_u64("WAVELENGTH_REQUEST_TIMEOUT_SECS", "120")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "WAVELENGTH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("WAVELENGTH_USER_AGENT", "wavelength/0.1 (strategy-report)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        firecrawl_base_url,
        ai_gateway_base_url,
        ai_model,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "WAVELENGTH_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

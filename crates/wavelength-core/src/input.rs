//! Analysis request input: presence checks, form validation, URL normalisation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::Platform;

const MIN_URL_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub website_url: String,
    pub product_description: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_voice: Option<String>,
}

impl AnalysisInput {
    /// Brand voice text, if any non-blank text was supplied.
    #[must_use]
    pub fn brand_voice(&self) -> Option<&str> {
        self.brand_voice
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Request body as received, before any field is known to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAnalysisInput {
    pub website_url: Option<String>,
    pub product_description: Option<String>,
    pub platform: Option<String>,
    pub brand_voice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("unsupported platform \"{0}\"")]
    UnknownPlatform(String),

    #[error("{}", join_messages(.0))]
    Invalid(Vec<FieldError>),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ")
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

impl RawAnalysisInput {
    /// Presence check only. Values are passed through as received apart from
    /// the platform, which must be known.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingFields`] if the URL, description, or
    /// platform is absent or blank, and [`InputError::UnknownPlatform`] if the
    /// platform is not one of the supported values.
    pub fn require_fields(self) -> Result<AnalysisInput, InputError> {
        let (Some(url), Some(description), Some(platform)) = (
            present(self.website_url.as_ref()),
            present(self.product_description.as_ref()),
            present(self.platform.as_ref()),
        ) else {
            return Err(InputError::MissingFields);
        };

        Ok(AnalysisInput {
            website_url: url.to_owned(),
            product_description: description.to_owned(),
            platform: platform.parse()?,
            brand_voice: self.brand_voice,
        })
    }

    /// Full submission check: every field is validated and all failures are
    /// reported together. On success the URL is normalised with
    /// [`normalize_url`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Invalid`] listing each failing field.
    pub fn validate(self) -> Result<AnalysisInput, InputError> {
        let mut errors = Vec::new();

        let url = self.website_url.unwrap_or_default();
        if !is_plausible_url(&url) {
            errors.push(FieldError {
                field: "websiteUrl",
                message: "Please enter a website URL",
            });
        }

        let description = self.product_description.unwrap_or_default();
        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.push(FieldError {
                field: "productDescription",
                message: "Please provide at least 10 characters describing your product",
            });
        }

        let platform = self
            .platform
            .as_deref()
            .and_then(Platform::from_wire);
        if platform.is_none() {
            errors.push(FieldError {
                field: "platform",
                message: "Please select a supported platform",
            });
        }

        match platform {
            Some(platform) if errors.is_empty() => Ok(AnalysisInput {
                website_url: normalize_url(&url),
                product_description: description,
                platform,
                brand_voice: self.brand_voice,
            }),
            _ => Err(InputError::Invalid(errors)),
        }
    }

    /// Boundary check for submissions that bypass the form: absent or blank
    /// fields are [`InputError::MissingFields`], and present ones must pass
    /// [`validate`](Self::validate), which also normalises the URL.
    ///
    /// # Errors
    ///
    /// See [`require_fields`](Self::require_fields) and
    /// [`validate`](Self::validate).
    pub fn require_valid(self) -> Result<AnalysisInput, InputError> {
        self.clone().require_fields()?;
        self.validate()
    }
}

/// Accepts anything that parses as an absolute URL, or a bare host-like
/// string of at least three characters.
#[must_use]
fn is_plausible_url(value: &str) -> bool {
    let trimmed = value.trim();
    url::Url::parse(trimmed).is_ok() || trimmed.chars().count() >= MIN_URL_CHARS
}

/// Trims the URL and prefixes `https://` when no http(s) scheme is present.
#[must_use]
pub fn normalize_url(value: &str) -> String {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;

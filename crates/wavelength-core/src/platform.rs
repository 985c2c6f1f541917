use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Advertising platform a strategy is generated for.
///
/// Every platform-conditional branch in the report (keywords, communities,
/// LinkedIn targeting, search ad assets) is answered here with an exhaustive
/// `match`, so adding a variant fails to compile until each capability is
/// decided for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Meta,
    Tiktok,
    Youtube,
    Reddit,
    Linkedin,
    Google,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Meta,
        Platform::Tiktok,
        Platform::Youtube,
        Platform::Reddit,
        Platform::Linkedin,
        Platform::Google,
    ];

    /// Wire value used in requests and in the generated `targetingStrategy.platform`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Meta => "meta",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Reddit => "reddit",
            Platform::Linkedin => "linkedin",
            Platform::Google => "google",
        }
    }

    /// Label shown when choosing a platform.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Platform::Meta => "Meta (Facebook/Instagram)",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
            Platform::Reddit => "Reddit",
            Platform::Linkedin => "LinkedIn",
            Platform::Google => "Google Search",
        }
    }

    /// Label for the platform's ads product, used on the targeting section.
    #[must_use]
    pub fn ads_label(self) -> &'static str {
        match self {
            Platform::Meta => "Meta Ads",
            Platform::Tiktok => "TikTok Ads",
            Platform::Youtube => "YouTube Ads",
            Platform::Reddit => "Reddit Ads",
            Platform::Linkedin => "LinkedIn Ads",
            Platform::Google => "Google Ads",
        }
    }

    /// Search-oriented platforms show keyword targeting.
    #[must_use]
    pub fn shows_keywords(self) -> bool {
        match self {
            Platform::Google | Platform::Youtube | Platform::Reddit => true,
            Platform::Meta | Platform::Tiktok | Platform::Linkedin => false,
        }
    }

    /// Community-oriented platforms show community (subreddit) targeting.
    #[must_use]
    pub fn shows_communities(self) -> bool {
        match self {
            Platform::Reddit => true,
            Platform::Meta
            | Platform::Tiktok
            | Platform::Youtube
            | Platform::Linkedin
            | Platform::Google => false,
        }
    }

    #[must_use]
    pub fn shows_linkedin_targeting(self) -> bool {
        match self {
            Platform::Linkedin => true,
            Platform::Meta
            | Platform::Tiktok
            | Platform::Youtube
            | Platform::Reddit
            | Platform::Google => false,
        }
    }

    /// Platforms whose ad copy uses Responsive Search Ad assets instead of
    /// headline/hook/body variations.
    #[must_use]
    pub fn uses_search_ads(self) -> bool {
        match self {
            Platform::Google => true,
            Platform::Meta
            | Platform::Tiktok
            | Platform::Youtube
            | Platform::Reddit
            | Platform::Linkedin => false,
        }
    }

    /// Exact, case-sensitive match against the wire value.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::from_wire(s).ok_or_else(|| InputError::UnknownPlatform(s.to_owned()))
    }
}

//! The structured strategy document returned by the generator.
//!
//! Field names follow the camelCase JSON contract the model is instructed to
//! produce. Every field goes through a [`crate::lenient`] deserializer: absent,
//! `null` or mistyped values fall back to empty ones and enumerations keep
//! unrecognised values verbatim, so an off-contract reply still reaches the
//! renderer.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::platform::Platform;

/// Maximum characters in a Responsive Search Ad headline.
pub const HEADLINE_CHAR_LIMIT: usize = 30;
/// Maximum characters in a Responsive Search Ad description.
pub const DESCRIPTION_CHAR_LIMIT: usize = 90;

macro_rules! contract_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($wire:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value outside the known set, kept as received.
            Other(String),
        }

        impl $name {
            /// Value as it appears in the JSON contract.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw,
                }
            }

            /// Display label. Unknown values are shown as received.
            #[must_use]
            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(raw) => raw,
                }
            }

            /// Position on the ordered scale, `None` for unknown values.
            #[must_use]
            pub fn rank(&self) -> Option<usize> {
                [$(Self::$variant),+].iter().position(|known| known == self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(raw),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                lenient::text(deserializer).map(Self::from)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

contract_enum! {
    /// How informed a prospect is about their problem and its solutions,
    /// ordered from least to most aware.
    pub enum BuyerAwareness {
        Unaware => ("unaware", "Unaware"),
        ProblemAware => ("problem-aware", "Problem Aware"),
        SolutionAware => ("solution-aware", "Solution Aware"),
        ProductAware => ("product-aware", "Product Aware"),
        MostAware => ("most-aware", "Most Aware"),
    }
}

contract_enum! {
    /// Generator's confidence in its website analysis, ordered low to high.
    pub enum Confidence {
        Low => ("low", "Low Confidence"),
        Medium => ("medium", "Medium Confidence"),
        High => ("high", "High Confidence"),
    }
}

contract_enum! {
    pub enum IcpType {
        Primary => ("primary", "Primary — Best for Paid Acquisition Now"),
        Secondary => ("secondary", "Secondary — Expansion Opportunity"),
        Avoid => ("avoid", "Avoid Initially"),
    }
}

contract_enum! {
    /// Purchase readiness of the recommended audience.
    pub enum FunnelStage {
        Cold => ("cold", "Cold Traffic"),
        Warm => ("warm", "Warm Traffic"),
        Retargeting => ("retargeting", "Retargeting"),
    }
}

contract_enum! {
    pub enum AudiencePriority {
        Primary => ("primary", "Primary"),
        Test => ("test", "Test"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsiteAnalysis {
    #[serde(deserialize_with = "lenient::text")]
    pub value_proposition: String,
    #[serde(deserialize_with = "lenient::text")]
    pub problem_solved: String,
    #[serde(deserialize_with = "lenient::text")]
    pub target_customer_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub industry: String,
    #[serde(deserialize_with = "lenient::text")]
    pub pricing_signals: String,
    pub buyer_awareness_level: BuyerAwareness,
    pub confidence: Confidence,
    #[serde(deserialize_with = "lenient::text_list")]
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Demographics {
    #[serde(deserialize_with = "lenient::text")]
    pub age_range: String,
    #[serde(deserialize_with = "lenient::text")]
    pub gender: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub income: String,
    #[serde(deserialize_with = "lenient::text")]
    pub education: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Psychographics {
    #[serde(deserialize_with = "lenient::text_list")]
    pub values: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub lifestyle: String,
}

/// Ideal customer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Icp {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IcpType,
    #[serde(deserialize_with = "lenient::record")]
    pub demographics: Demographics,
    #[serde(deserialize_with = "lenient::record")]
    pub psychographics: Psychographics,
    #[serde(deserialize_with = "lenient::text_list")]
    pub job_titles: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub behavioral_traits: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub pain_points: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub emotional_drivers: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub reasoning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudienceType {
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    pub priority: AudiencePriority,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkedinTargeting {
    #[serde(deserialize_with = "lenient::text_list")]
    pub job_titles: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub companies: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub industries: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub groups: Vec<String>,
}

impl LinkedinTargeting {
    /// Non-empty facets in display order, paired with their labels.
    #[must_use]
    pub fn facets(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Job Titles", self.job_titles.as_slice()),
            ("Skills", self.skills.as_slice()),
            ("Companies", self.companies.as_slice()),
            ("Industries", self.industries.as_slice()),
            ("Groups", self.groups.as_slice()),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetRecommendation {
    #[serde(deserialize_with = "lenient::text")]
    pub daily_min: String,
    #[serde(deserialize_with = "lenient::text")]
    pub test_duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetingStrategy {
    /// Platform as returned by the generator; matched exactly against
    /// [`Platform`] wire values when deciding what to show.
    #[serde(deserialize_with = "lenient::text")]
    pub platform: String,
    #[serde(deserialize_with = "lenient::records")]
    pub audience_types: Vec<AudienceType>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub behaviors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_text_list")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_text_list")]
    pub communities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_record")]
    pub linkedin_targeting: Option<LinkedinTargeting>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub placements: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub exclusions: Vec<String>,
    pub funnel_stage: FunnelStage,
    #[serde(deserialize_with = "lenient::text")]
    pub funnel_reasoning: String,
    #[serde(deserialize_with = "lenient::text")]
    pub platform_notes: String,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_record")]
    pub budget_recommendation: Option<BudgetRecommendation>,
}

impl TargetingStrategy {
    #[must_use]
    pub fn platform_kind(&self) -> Option<Platform> {
        Platform::from_wire(&self.platform)
    }

    /// Keywords, when present and the platform is search-oriented.
    #[must_use]
    pub fn visible_keywords(&self) -> Option<&[String]> {
        let keywords = self.keywords.as_deref().filter(|k| !k.is_empty())?;
        self.platform_kind()
            .filter(|p| p.shows_keywords())
            .map(|_| keywords)
    }

    /// Communities, when present and the platform is community-oriented.
    #[must_use]
    pub fn visible_communities(&self) -> Option<&[String]> {
        let communities = self.communities.as_deref().filter(|c| !c.is_empty())?;
        self.platform_kind()
            .filter(|p| p.shows_communities())
            .map(|_| communities)
    }

    #[must_use]
    pub fn visible_linkedin_targeting(&self) -> Option<&LinkedinTargeting> {
        let targeting = self.linkedin_targeting.as_ref()?;
        self.platform_kind()
            .filter(|p| p.shows_linkedin_targeting())
            .map(|_| targeting)
    }

    /// Platform ads label, or the raw value when it is not a known platform.
    #[must_use]
    pub fn platform_label(&self) -> &str {
        match self.platform_kind() {
            Some(platform) => platform.ads_label(),
            None => &self.platform,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdVariation {
    #[serde(deserialize_with = "lenient::text")]
    pub headline: String,
    #[serde(deserialize_with = "lenient::text")]
    pub hook: String,
    #[serde(deserialize_with = "lenient::text")]
    pub primary_text: String,
    #[serde(deserialize_with = "lenient::text")]
    pub cta: String,
    #[serde(deserialize_with = "lenient::text")]
    pub testing_variable: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCopy {
    #[serde(deserialize_with = "lenient::text")]
    pub audience_segment: String,
    #[serde(deserialize_with = "lenient::text")]
    pub platform_format: String,
    #[serde(deserialize_with = "lenient::records")]
    pub ads: Vec<AdVariation>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub success_signals: Vec<String>,
}

/// One Responsive Search Ad headline or description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchAsset {
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
    /// Count reported by the generator. Limits are checked against
    /// [`SearchAsset::char_len`] instead.
    #[serde(deserialize_with = "lenient::count")]
    pub char_count: u32,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_text")]
    pub search_term_included: Option<String>,
}

impl SearchAsset {
    /// Measured length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn exceeds(&self, limit: usize) -> bool {
        self.char_len() > limit
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchAdGroup {
    #[serde(deserialize_with = "lenient::text")]
    pub audience_segment: String,
    #[serde(deserialize_with = "lenient::records")]
    pub headlines: Vec<SearchAsset>,
    #[serde(deserialize_with = "lenient::records")]
    pub descriptions: Vec<SearchAsset>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub target_keywords: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub display_path: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub testing_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient::record")]
    pub website_analysis: WebsiteAnalysis,
    #[serde(deserialize_with = "lenient::records")]
    pub icps: Vec<Icp>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_record")]
    pub targeting_strategy: Option<TargetingStrategy>,
    #[serde(deserialize_with = "lenient::records")]
    pub ad_copy: Vec<AdCopy>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_records")]
    pub search_ad_copy: Option<Vec<SearchAdGroup>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::optional_text")]
    pub scraped_content: Option<String>,
}

impl AnalysisResult {
    /// Search ad groups, only when present and non-empty. When this returns
    /// `Some`, the generic ad copy is not shown.
    #[must_use]
    pub fn search_ad_groups(&self) -> Option<&[SearchAdGroup]> {
        self.search_ad_copy.as_deref().filter(|g| !g.is_empty())
    }

    /// ICPs of the given classification, in generator order.
    pub fn icps_of<'a>(&'a self, kind: &'a IcpType) -> impl Iterator<Item = &'a Icp> + 'a {
        self.icps.iter().filter(move |icp| &icp.kind == kind)
    }
}

/// Response body of the analyze operation: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisEnvelope {
    #[must_use]
    pub fn success(result: AnalysisResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
        }
    }

    /// Unwraps the envelope into the result or its error message.
    ///
    /// # Errors
    ///
    /// Returns the carried error message, or `"Analysis failed"` when a
    /// failure envelope has none.
    pub fn into_result(self) -> Result<AnalysisResult, String> {
        match (self.success, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(self.error.unwrap_or_else(|| "Analysis failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(platform: &str) -> TargetingStrategy {
        TargetingStrategy {
            platform: platform.to_string(),
            keywords: Some(vec!["crm software".to_string()]),
            communities: Some(vec!["r/smallbusiness".to_string()]),
            linkedin_targeting: Some(LinkedinTargeting {
                job_titles: vec!["Head of Sales".to_string()],
                ..LinkedinTargeting::default()
            }),
            ..TargetingStrategy::default()
        }
    }

    #[test]
    fn contract_enum_keeps_unknown_values() {
        let parsed: BuyerAwareness = serde_json::from_str("\"very-aware\"").expect("parse");
        assert_eq!(parsed, BuyerAwareness::Other("very-aware".to_string()));
        assert_eq!(parsed.label(), "very-aware");
        assert_eq!(parsed.rank(), None);
        assert_eq!(
            serde_json::to_string(&parsed).expect("serialize"),
            "\"very-aware\""
        );
    }

    #[test]
    fn contract_enum_ranks_follow_declaration_order() {
        assert!(BuyerAwareness::Unaware.rank() < BuyerAwareness::MostAware.rank());
        assert!(Confidence::Low.rank() < Confidence::High.rank());
        assert_eq!(BuyerAwareness::SolutionAware.rank(), Some(2));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let parsed: AnalysisResult =
            serde_json::from_str(r#"{"websiteAnalysis":{"industry":"SaaS"},"extra":1}"#)
                .expect("lenient parse");
        assert_eq!(parsed.website_analysis.industry, "SaaS");
        assert!(parsed.website_analysis.assumptions.is_empty());
        assert!(parsed.icps.is_empty());
        assert!(parsed.targeting_strategy.is_none());
        assert!(parsed.search_ad_groups().is_none());
    }

    #[test]
    fn icp_type_field_uses_type_key() {
        let icp: Icp =
            serde_json::from_str(r#"{"name":"Ops leads","type":"avoid"}"#).expect("parse");
        assert_eq!(icp.kind, IcpType::Avoid);
        let json = serde_json::to_value(&icp).expect("serialize");
        assert_eq!(json["type"], "avoid");
        assert_eq!(json["jobTitles"], serde_json::json!([]));
    }

    #[test]
    fn meta_strategy_hides_all_conditional_blocks() {
        let s = strategy("meta");
        assert!(s.visible_keywords().is_none());
        assert!(s.visible_communities().is_none());
        assert!(s.visible_linkedin_targeting().is_none());
        assert_eq!(s.platform_label(), "Meta Ads");
    }

    #[test]
    fn conditional_blocks_match_platform_exactly() {
        assert!(strategy("google").visible_keywords().is_some());
        assert!(strategy("google").visible_communities().is_none());
        assert!(strategy("reddit").visible_communities().is_some());
        assert!(strategy("linkedin").visible_linkedin_targeting().is_some());
        assert!(strategy("LinkedIn").visible_linkedin_targeting().is_none());
        assert_eq!(strategy("LinkedIn").platform_label(), "LinkedIn");
    }

    #[test]
    fn platform_label_falls_back_to_raw_platform() {
        assert_eq!(strategy("google").platform_label(), "Google Ads");
        assert_eq!(strategy("Pinterest").platform_label(), "Pinterest");
        assert_eq!(strategy("").platform_label(), "");
    }

    #[test]
    fn empty_keywords_are_hidden_even_on_search_platforms() {
        let s = TargetingStrategy {
            platform: "google".to_string(),
            keywords: Some(Vec::new()),
            ..TargetingStrategy::default()
        };
        assert!(s.visible_keywords().is_none());
    }

    #[test]
    fn search_asset_limits_use_measured_length() {
        let asset = SearchAsset {
            text: "Café CRM für Teams — jetzt testen".to_string(),
            char_count: 10,
            search_term_included: None,
        };
        assert_eq!(asset.char_len(), 33);
        assert!(asset.exceeds(HEADLINE_CHAR_LIMIT));
        assert!(!asset.exceeds(DESCRIPTION_CHAR_LIMIT));
    }

    #[test]
    fn linkedin_facets_skip_empty_lists() {
        let targeting = LinkedinTargeting {
            skills: vec!["Salesforce".to_string()],
            groups: vec!["RevOps Leaders".to_string()],
            ..LinkedinTargeting::default()
        };
        let labels: Vec<&str> = targeting.facets().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Skills", "Groups"]);
    }

    #[test]
    fn envelope_serializes_only_the_relevant_branch() {
        let ok = serde_json::to_value(AnalysisEnvelope::success(AnalysisResult::default()))
            .expect("serialize");
        assert_eq!(ok["success"], true);
        assert!(ok.get("error").is_none());

        let failed =
            serde_json::to_value(AnalysisEnvelope::failure("No response from AI")).expect("serialize");
        assert_eq!(failed["success"], false);
        assert_eq!(failed["error"], "No response from AI");
        assert!(failed.get("result").is_none());
    }

    #[test]
    fn envelope_into_result_defaults_message() {
        let envelope = AnalysisEnvelope {
            success: false,
            result: None,
            error: None,
        };
        assert_eq!(envelope.into_result().unwrap_err(), "Analysis failed");
    }
}

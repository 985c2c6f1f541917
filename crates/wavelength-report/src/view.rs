//! Platform-gated view model over an [`AnalysisResult`].
//!
//! Every "is this block shown?" decision lives here, so the text report, the
//! CSV export, and any outer surface agree on what a given result displays.

use wavelength_core::{
    AdCopy, AnalysisResult, BudgetRecommendation, Icp, IcpType, SearchAdGroup, SearchAsset,
    TargetingStrategy, WebsiteAnalysis, DESCRIPTION_CHAR_LIMIT, HEADLINE_CHAR_LIMIT,
};

#[derive(Debug)]
pub struct ReportView<'a> {
    pub analysis: AnalysisView<'a>,
    pub icp_groups: Vec<IcpGroup<'a>>,
    pub targeting: Option<TargetingView<'a>>,
    pub ad_copy: AdCopyView<'a>,
}

#[derive(Debug)]
pub struct AnalysisView<'a> {
    pub analysis: &'a WebsiteAnalysis,
    pub awareness_label: &'a str,
    pub confidence_label: &'a str,
    /// `None` when the generator listed no assumptions.
    pub assumptions: Option<&'a [String]>,
}

#[derive(Debug)]
pub struct IcpGroup<'a> {
    pub heading: &'a str,
    pub icps: Vec<&'a Icp>,
}

#[derive(Debug)]
pub struct TargetingView<'a> {
    pub strategy: &'a TargetingStrategy,
    pub platform_label: &'a str,
    pub funnel_label: &'a str,
    pub keywords: Option<&'a [String]>,
    /// Subreddits, each rendered as `r/<name>`.
    pub communities: Option<Vec<String>>,
    pub linkedin: Option<Vec<(&'static str, &'a [String])>>,
    pub budget: Option<&'a BudgetRecommendation>,
}

/// Ad copy is shown in exactly one of the two shapes.
#[derive(Debug)]
pub enum AdCopyView<'a> {
    Search(Vec<SearchGroupView<'a>>),
    Generic(&'a [AdCopy]),
}

#[derive(Debug)]
pub struct SearchGroupView<'a> {
    pub group: &'a SearchAdGroup,
    pub headlines: Vec<AssetView<'a>>,
    pub descriptions: Vec<AssetView<'a>>,
}

#[derive(Debug)]
pub struct AssetView<'a> {
    pub asset: &'a SearchAsset,
    pub char_len: usize,
    pub limit: usize,
    pub over_limit: bool,
}

impl<'a> AssetView<'a> {
    fn new(asset: &'a SearchAsset, limit: usize) -> Self {
        Self {
            asset,
            char_len: asset.char_len(),
            limit,
            over_limit: asset.exceeds(limit),
        }
    }
}

impl<'a> ReportView<'a> {
    #[must_use]
    pub fn build(result: &'a AnalysisResult) -> Self {
        Self {
            analysis: analysis_view(&result.website_analysis),
            icp_groups: icp_groups(&result.icps),
            targeting: result.targeting_strategy.as_ref().map(targeting_view),
            ad_copy: ad_copy_view(result),
        }
    }
}

fn analysis_view(analysis: &WebsiteAnalysis) -> AnalysisView<'_> {
    AnalysisView {
        analysis,
        awareness_label: analysis.buyer_awareness_level.label(),
        confidence_label: analysis.confidence.label(),
        assumptions: Some(analysis.assumptions.as_slice()).filter(|a| !a.is_empty()),
    }
}

/// Known classifications first in fixed order, then any unrecognised
/// classification in first-seen order under its raw value. Empty groups are
/// omitted.
fn icp_groups(icps: &[Icp]) -> Vec<IcpGroup<'_>> {
    static KNOWN: [IcpType; 3] = [IcpType::Primary, IcpType::Secondary, IcpType::Avoid];

    let mut kinds: Vec<&IcpType> = KNOWN.iter().collect();
    for icp in icps {
        if !kinds.contains(&&icp.kind) {
            kinds.push(&icp.kind);
        }
    }

    kinds
        .into_iter()
        .filter_map(|kind| {
            let members: Vec<&Icp> = icps.iter().filter(|icp| &icp.kind == kind).collect();
            let first = *members.first()?;
            Some(IcpGroup {
                heading: first.kind.label(),
                icps: members,
            })
        })
        .collect()
}

fn targeting_view(strategy: &TargetingStrategy) -> TargetingView<'_> {
    TargetingView {
        strategy,
        platform_label: strategy.platform_label(),
        funnel_label: strategy.funnel_stage.label(),
        keywords: strategy.visible_keywords(),
        communities: strategy
            .visible_communities()
            .map(|names| names.iter().map(|name| subreddit(name)).collect()),
        linkedin: strategy
            .visible_linkedin_targeting()
            .map(wavelength_core::LinkedinTargeting::facets),
        budget: strategy.budget_recommendation.as_ref(),
    }
}

fn ad_copy_view(result: &AnalysisResult) -> AdCopyView<'_> {
    match result.search_ad_groups() {
        Some(groups) => AdCopyView::Search(
            groups
                .iter()
                .map(|group| SearchGroupView {
                    group,
                    headlines: group
                        .headlines
                        .iter()
                        .map(|h| AssetView::new(h, HEADLINE_CHAR_LIMIT))
                        .collect(),
                    descriptions: group
                        .descriptions
                        .iter()
                        .map(|d| AssetView::new(d, DESCRIPTION_CHAR_LIMIT))
                        .collect(),
                })
                .collect(),
        ),
        None => AdCopyView::Generic(&result.ad_copy),
    }
}

/// `r/<name>`, tolerating names the generator already prefixed.
#[must_use]
pub fn subreddit(name: &str) -> String {
    let name = name.trim();
    format!("r/{}", name.strip_prefix("r/").unwrap_or(name))
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

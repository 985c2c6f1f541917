use wavelength_core::{AnalysisResult, Icp, IcpType};

use super::*;
use crate::test_fixtures::{google_result, meta_result};

#[test]
fn meta_view_hides_search_only_and_community_blocks() {
    let result = meta_result();
    let view = ReportView::build(&result);
    let targeting = view.targeting.expect("targeting present");

    assert_eq!(targeting.platform_label, "Meta Ads");
    assert_eq!(targeting.funnel_label, "Cold Traffic");
    assert!(targeting.keywords.is_none());
    assert!(targeting.communities.is_none());
    assert!(targeting.linkedin.is_none());
    assert!(targeting.budget.is_some());
    assert!(matches!(view.ad_copy, AdCopyView::Generic(copies) if copies.len() == 1));
}

#[test]
fn google_view_shows_search_assets_only() {
    let result = google_result();
    let view = ReportView::build(&result);

    let AdCopyView::Search(groups) = &view.ad_copy else {
        panic!("expected search ad view");
    };
    assert_eq!(groups.len(), 1);
    let flags: Vec<bool> = groups[0].headlines.iter().map(|h| h.over_limit).collect();
    assert_eq!(flags, vec![false, true]);
    assert_eq!(groups[0].headlines[1].char_len, 40);
    assert!(!groups[0].descriptions[0].over_limit);

    let targeting = view.targeting.expect("targeting present");
    assert_eq!(
        targeting.keywords.map(<[String]>::len),
        Some(1),
        "google shows keywords"
    );
    assert!(targeting.communities.is_none());
}

#[test]
fn empty_search_ad_copy_falls_back_to_generic_view() {
    let mut result = google_result();
    result.search_ad_copy = Some(Vec::new());
    let view = ReportView::build(&result);
    assert!(matches!(view.ad_copy, AdCopyView::Generic(_)));
}

#[test]
fn reddit_communities_render_with_prefix_once() {
    let mut result = meta_result();
    if let Some(t) = result.targeting_strategy.as_mut() {
        t.platform = "reddit".to_string();
        t.communities = Some(vec!["SaaS".to_string(), "r/sysadmin".to_string()]);
    }
    let view = ReportView::build(&result);
    let communities = view
        .targeting
        .and_then(|t| t.communities)
        .expect("reddit shows communities");
    assert_eq!(communities, vec!["r/SaaS", "r/sysadmin"]);
}

#[test]
fn linkedin_view_lists_only_filled_facets() {
    let mut result = meta_result();
    if let Some(t) = result.targeting_strategy.as_mut() {
        t.platform = "linkedin".to_string();
    }
    let view = ReportView::build(&result);
    let facets = view
        .targeting
        .and_then(|t| t.linkedin)
        .expect("linkedin shows its block");
    assert_eq!(facets.len(), 1);
    assert_eq!(facets[0].0, "Job Titles");
}

#[test]
fn icp_groups_follow_fixed_order_and_skip_empty() {
    let mut result = meta_result();
    result.icps.retain(|icp| icp.kind != IcpType::Secondary);
    result.icps.reverse();
    let view = ReportView::build(&result);

    let headings: Vec<&str> = view.icp_groups.iter().map(|g| g.heading).collect();
    assert_eq!(
        headings,
        vec!["Primary — Best for Paid Acquisition Now", "Avoid Initially"]
    );
}

#[test]
fn unknown_icp_type_gets_its_own_trailing_group() {
    let result = AnalysisResult {
        icps: vec![
            Icp {
                name: "Maybe later".to_string(),
                kind: IcpType::Other("tertiary".to_string()),
                ..Icp::default()
            },
            Icp {
                name: "Core".to_string(),
                kind: IcpType::Primary,
                ..Icp::default()
            },
        ],
        ..AnalysisResult::default()
    };
    let view = ReportView::build(&result);
    let headings: Vec<&str> = view.icp_groups.iter().map(|g| g.heading).collect();
    assert_eq!(
        headings,
        vec!["Primary — Best for Paid Acquisition Now", "tertiary"]
    );
}

#[test]
fn assumptions_hidden_when_empty() {
    let mut result = meta_result();
    result.website_analysis.assumptions.clear();
    let view = ReportView::build(&result);
    assert!(view.analysis.assumptions.is_none());
    assert_eq!(view.analysis.awareness_label, "Solution Aware");
    assert_eq!(view.analysis.confidence_label, "Medium Confidence");
}

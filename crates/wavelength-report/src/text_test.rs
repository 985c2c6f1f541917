use wavelength_core::AnalysisResult;

use super::*;
use crate::test_fixtures::{google_result, meta_result};

#[test]
fn full_report_sections_in_fixed_order() {
    let report = format_full_report(&meta_result());
    let positions: Vec<usize> = [
        "📊 WEBSITE ANALYSIS",
        "👥 IDEAL CUSTOMER PROFILES",
        "🎯 PLATFORM TARGETING STRATEGY",
        "📝 AD COPY",
    ]
    .iter()
    .map(|title| report.find(title).expect("section present"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(report.contains("\n\n👥 IDEAL CUSTOMER PROFILES\n"));
}

#[test]
fn full_report_is_deterministic() {
    let result = google_result();
    assert_eq!(format_full_report(&result), format_full_report(&result));
}

#[test]
fn meta_report_omits_gated_targeting_lines() {
    let report = format_full_report(&meta_result());
    assert!(report.contains("Platform: Meta Ads"));
    assert!(report.contains("Funnel Stage: Cold Traffic"));
    assert!(!report.contains("Keywords:"));
    assert!(!report.contains("Communities:"));
    assert!(!report.contains("LinkedIn Targeting:"));
    assert!(report.contains("  Variation 2:"));
    assert!(report.contains("    ✓ CTR > 1.5%"));
}

#[test]
fn google_report_shows_search_ads_instead_of_variations() {
    let report = format_full_report(&google_result());
    assert!(report.contains("── Google Search Ads ──"));
    assert!(report.contains("    • Shared Inbox for Support (24 chars)"));
    assert!(report.contains("(40/30 chars, over limit)"));
    assert!(report.contains("  Display Path: helpdesk/trial"));
    assert!(!report.contains("Variation 1:"));
}

#[test]
fn targeting_section_skipped_when_absent() {
    let mut result = meta_result();
    result.targeting_strategy = None;
    assert!(format_section(&result, Section::Targeting).is_none());
    assert!(!format_full_report(&result).contains("TARGETING"));
}

#[test]
fn empty_result_still_renders_headings() {
    let report = format_full_report(&AnalysisResult::default());
    assert!(report.starts_with("📊 WEBSITE ANALYSIS\n"));
    assert!(report.contains("📝 AD COPY"));
}

#[test]
fn ad_variation_copy_text() {
    let result = meta_result();
    let ad = &result.ad_copy[0].ads[1];
    assert_eq!(
        format_ad_variation(ad),
        "\"Zero missed tickets\"\n\nWhat 40 teams said, in one line\n\nSocial proof, fast.\n\nCTA: See how"
    );
}

#[test]
fn search_group_copy_text_numbers_assets() {
    let result = google_result();
    let view = ReportView::build(&result);
    let AdCopyView::Search(groups) = &view.ad_copy else {
        panic!("expected search ad view");
    };
    let text = format_search_ad_group(&groups[0]);
    assert!(text.starts_with("Headline 1: Shared Inbox for Support\nHeadline 2: "));
    assert!(text.contains("\n\nDescription 1: One inbox"));
    assert!(!text.ends_with('\n'));
}

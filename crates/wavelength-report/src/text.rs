//! Plain-text report, for copying into docs or a terminal.
//!
//! Output is a pure function of the result: same input, same bytes.

use std::fmt::Write as _;

use wavelength_core::{AdVariation, AnalysisResult};

use crate::section::Section;
use crate::view::{AdCopyView, AnalysisView, IcpGroup, ReportView, SearchGroupView, TargetingView};

const RULE_WIDTH: usize = 40;

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_owned());
    lines.push("═".repeat(RULE_WIDTH));
}

fn push_list(lines: &mut Vec<String>, label: &str, values: &[String]) {
    if !values.is_empty() {
        lines.push(format!("{label}: {}", values.join(", ")));
    }
}

#[must_use]
pub fn format_website_analysis(view: &AnalysisView<'_>) -> String {
    let a = view.analysis;
    let mut lines = Vec::new();
    heading(&mut lines, "📊 WEBSITE ANALYSIS");
    lines.push(format!("Value Proposition: {}", a.value_proposition));
    lines.push(format!("Problem Solved: {}", a.problem_solved));
    lines.push(format!("Target Customer Type: {}", a.target_customer_type));
    lines.push(format!("Industry: {}", a.industry));
    lines.push(format!("Pricing Signals: {}", a.pricing_signals));
    lines.push(format!("Buyer Awareness Level: {}", view.awareness_label));
    lines.push(format!("Confidence: {}", view.confidence_label));

    if let Some(assumptions) = view.assumptions {
        lines.push(String::new());
        lines.push("Assumptions:".to_owned());
        lines.extend(assumptions.iter().map(|a| format!("  • {a}")));
    }

    lines.join("\n")
}

#[must_use]
pub fn format_icps(groups: &[IcpGroup<'_>]) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "👥 IDEAL CUSTOMER PROFILES");

    for group in groups {
        lines.push(String::new());
        lines.push(format!("── {} ──", group.heading));
        for icp in &group.icps {
            let d = &icp.demographics;
            let p = &icp.psychographics;
            lines.push(String::new());
            lines.push(format!("  {}", icp.name));
            lines.push(format!(
                "  Age: {} | Gender: {} | Location: {}",
                d.age_range, d.gender, d.location
            ));
            lines.push(format!("  Income: {} | Education: {}", d.income, d.education));
            lines.push(format!("  Job Titles: {}", icp.job_titles.join(", ")));
            lines.push(format!("  Pain Points: {}", icp.pain_points.join(", ")));
            lines.push(format!(
                "  Emotional Drivers: {}",
                icp.emotional_drivers.join(", ")
            ));
            lines.push(format!(
                "  Behavioral Traits: {}",
                icp.behavioral_traits.join(", ")
            ));
            lines.push(format!("  Values: {}", p.values.join(", ")));
            lines.push(format!("  Interests: {}", p.interests.join(", ")));
            lines.push(format!("  Lifestyle: {}", p.lifestyle));
            lines.push(format!("  Reasoning: {}", icp.reasoning));
        }
    }

    lines.join("\n")
}

#[must_use]
pub fn format_targeting(view: &TargetingView<'_>) -> String {
    let s = view.strategy;
    let mut lines = Vec::new();
    heading(&mut lines, "🎯 PLATFORM TARGETING STRATEGY");
    lines.push(format!("Platform: {}", view.platform_label));
    lines.push(format!("Funnel Stage: {}", view.funnel_label));
    lines.push(format!("Funnel Reasoning: {}", s.funnel_reasoning));

    if !s.audience_types.is_empty() {
        lines.push(String::new());
        lines.push("Audiences:".to_owned());
        for audience in &s.audience_types {
            lines.push(format!(
                "  [{}] {}: {}",
                audience.priority, audience.kind, audience.description
            ));
        }
    }

    if !s.interests.is_empty() {
        lines.push(String::new());
    }
    push_list(&mut lines, "Interests", &s.interests);
    push_list(&mut lines, "Behaviors", &s.behaviors);
    if let Some(keywords) = view.keywords {
        push_list(&mut lines, "Keywords", keywords);
    }
    if let Some(communities) = &view.communities {
        push_list(&mut lines, "Communities", communities);
    }
    if let Some(facets) = &view.linkedin {
        lines.push(String::new());
        lines.push("LinkedIn Targeting:".to_owned());
        for (label, values) in facets {
            lines.push(format!("  {label}: {}", values.join(", ")));
        }
    }
    push_list(&mut lines, "Placements", &s.placements);
    push_list(&mut lines, "Exclusions", &s.exclusions);

    if let Some(budget) = view.budget {
        lines.push(String::new());
        lines.push(format!("Daily Budget Minimum: {}", budget.daily_min));
        lines.push(format!("Test Duration: {}", budget.test_duration));
    }
    if !s.platform_notes.is_empty() {
        lines.push(String::new());
        lines.push(format!("Platform Notes: {}", s.platform_notes));
    }

    lines.join("\n")
}

#[must_use]
pub fn format_ad_copy(view: &AdCopyView<'_>) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "📝 AD COPY");

    match view {
        AdCopyView::Search(groups) => {
            lines.push(String::new());
            lines.push("── Google Search Ads ──".to_owned());
            for group in groups {
                let g = group.group;
                lines.push(String::new());
                lines.push(format!("  Audience: {}", g.audience_segment));
                lines.push(format!("  Keywords: {}", g.target_keywords.join(", ")));
                lines.push(format!("  Display Path: {}", g.display_path.join("/")));
                lines.push(String::new());
                lines.push("  Headlines:".to_owned());
                lines.extend(group.headlines.iter().map(|h| {
                    format!("    • {} ({})", h.asset.text, char_note(h.char_len, h.limit))
                }));
                lines.push(String::new());
                lines.push("  Descriptions:".to_owned());
                lines.extend(group.descriptions.iter().map(|d| {
                    format!("    • {} ({})", d.asset.text, char_note(d.char_len, d.limit))
                }));
                if !g.testing_notes.is_empty() {
                    lines.push(format!("  Testing Notes: {}", g.testing_notes));
                }
            }
        }
        AdCopyView::Generic(copies) => {
            for copy in *copies {
                lines.push(String::new());
                lines.push(format!(
                    "── {} ({}) ──",
                    copy.audience_segment, copy.platform_format
                ));
                for (i, ad) in copy.ads.iter().enumerate() {
                    lines.push(String::new());
                    lines.push(format!("  Variation {}:", i + 1));
                    lines.push(format!("    Headline: {}", ad.headline));
                    lines.push(format!("    Hook: {}", ad.hook));
                    lines.push(format!("    Primary Text: {}", ad.primary_text));
                    lines.push(format!("    CTA: {}", ad.cta));
                    lines.push(format!("    Testing Variable: {}", ad.testing_variable));
                }
                if !copy.success_signals.is_empty() {
                    lines.push(String::new());
                    lines.push("  Success Signals:".to_owned());
                    lines.extend(copy.success_signals.iter().map(|s| format!("    ✓ {s}")));
                }
            }
        }
    }

    lines.join("\n")
}

fn char_note(len: usize, limit: usize) -> String {
    if len > limit {
        format!("{len}/{limit} chars, over limit")
    } else {
        format!("{len} chars")
    }
}

/// Copy text for a single ad variation: headline, hook, body, then CTA.
#[must_use]
pub fn format_ad_variation(ad: &AdVariation) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\nCTA: {}",
        ad.headline, ad.hook, ad.primary_text, ad.cta
    )
}

/// Copy text for one search ad group: numbered headlines, a blank line, then
/// numbered descriptions.
#[must_use]
pub fn format_search_ad_group(group: &SearchGroupView<'_>) -> String {
    let mut out = String::new();
    for (i, h) in group.headlines.iter().enumerate() {
        let _ = writeln!(out, "Headline {}: {}", i + 1, h.asset.text);
    }
    out.push('\n');
    for (i, d) in group.descriptions.iter().enumerate() {
        let _ = writeln!(out, "Description {}: {}", i + 1, d.asset.text);
    }
    out.trim_end_matches('\n').to_owned()
}

/// One section of the report, or `None` when the result has nothing for it
/// (a result without a targeting strategy).
#[must_use]
pub fn format_section(result: &AnalysisResult, section: Section) -> Option<String> {
    let view = ReportView::build(result);
    render_section(&view, section)
}

fn render_section(view: &ReportView<'_>, section: Section) -> Option<String> {
    match section {
        Section::Analysis => Some(format_website_analysis(&view.analysis)),
        Section::Icps => Some(format_icps(&view.icp_groups)),
        Section::Targeting => view.targeting.as_ref().map(format_targeting),
        Section::AdCopy => Some(format_ad_copy(&view.ad_copy)),
    }
}

/// All sections in fixed order, separated by a blank line.
#[must_use]
pub fn format_full_report(result: &AnalysisResult) -> String {
    let view = ReportView::build(result);
    Section::ALL
        .into_iter()
        .filter_map(|section| render_section(&view, section))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;

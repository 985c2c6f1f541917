//! Spreadsheet export of a strategy document.
//!
//! The export is a sequence of independent tables separated by a blank line.
//! Each table has its own header row; list values are joined with `"; "`.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use wavelength_core::AnalysisResult;

use crate::error::ReportError;
use crate::view::{AdCopyView, AnalysisView, ReportView, TargetingView};

const LIST_SEPARATOR: &str = "; ";

/// Download name for an export generated on `date`.
#[must_use]
pub fn report_filename(date: NaiveDate) -> String {
    format!("wavelength-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Renders the full result as CSV text.
///
/// # Errors
///
/// Returns [`ReportError`] if the in-memory writer fails, which only happens
/// on allocation failure or a `csv` crate bug.
pub fn generate_report_csv(result: &AnalysisResult) -> Result<String, ReportError> {
    let view = ReportView::build(result);

    let mut tables = vec![analysis_table(&view.analysis)?, icp_table(result)?];
    if let Some(targeting) = &view.targeting {
        tables.push(targeting_table(targeting)?);
    }
    tables.push(ad_copy_table(&view.ad_copy)?);

    Ok(tables.join("\n"))
}

fn table_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ReportError> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes one record.
fn row(w: &mut Writer<Vec<u8>>, fields: &[&str]) -> Result<(), ReportError> {
    w.write_record(fields)?;
    Ok(())
}

fn joined(values: &[String]) -> String {
    values.join(LIST_SEPARATOR)
}

fn analysis_table(view: &AnalysisView<'_>) -> Result<String, ReportError> {
    const SECTION: &str = "Website Analysis";
    let a = view.analysis;
    let mut w = table_writer();
    row(&mut w, &["Section", "Field", "Value"])?;
    row(&mut w, &[SECTION, "Value Proposition", &a.value_proposition])?;
    row(&mut w, &[SECTION, "Problem Solved", &a.problem_solved])?;
    row(&mut w, &[SECTION, "Target Customer Type", &a.target_customer_type])?;
    row(&mut w, &[SECTION, "Industry", &a.industry])?;
    row(&mut w, &[SECTION, "Pricing Signals", &a.pricing_signals])?;
    row(&mut w, &[SECTION, "Buyer Awareness Level", a.buyer_awareness_level.as_str()])?;
    row(&mut w, &[SECTION, "Confidence", a.confidence.as_str()])?;
    if let Some(assumptions) = view.assumptions {
        row(&mut w, &[SECTION, "Assumptions", &joined(assumptions)])?;
    }
    finish(w)
}

fn icp_table(result: &AnalysisResult) -> Result<String, ReportError> {
    let mut w = table_writer();
    row(&mut w, &[
        "Section",
        "Name",
        "Type",
        "Age Range",
        "Gender",
        "Location",
        "Income",
        "Education",
        "Job Titles",
        "Pain Points",
        "Emotional Drivers",
        "Behavioral Traits",
        "Reasoning",
    ])?;
    for icp in &result.icps {
        let d = &icp.demographics;
        row(&mut w, &[
            "ICP",
            &icp.name,
            icp.kind.as_str(),
            &d.age_range,
            &d.gender,
            &d.location,
            &d.income,
            &d.education,
            &joined(&icp.job_titles),
            &joined(&icp.pain_points),
            &joined(&icp.emotional_drivers),
            &joined(&icp.behavioral_traits),
            &icp.reasoning,
        ])?;
    }
    finish(w)
}

fn targeting_table(view: &TargetingView<'_>) -> Result<String, ReportError> {
    const SECTION: &str = "Targeting";
    let s = view.strategy;
    let mut w = table_writer();
    row(&mut w, &["Section", "Field", "Value"])?;
    row(&mut w, &[SECTION, "Platform", &s.platform])?;
    row(&mut w, &[SECTION, "Funnel Stage", s.funnel_stage.as_str()])?;
    row(&mut w, &[SECTION, "Funnel Reasoning", &s.funnel_reasoning])?;
    for audience in &s.audience_types {
        let value = format!(
            "[{}] {}: {}",
            audience.priority, audience.kind, audience.description
        );
        row(&mut w, &[SECTION, "Audience", &value])?;
    }
    row(&mut w, &[SECTION, "Interests", &joined(&s.interests)])?;
    row(&mut w, &[SECTION, "Behaviors", &joined(&s.behaviors)])?;
    if let Some(keywords) = view.keywords {
        row(&mut w, &[SECTION, "Keywords", &joined(keywords)])?;
    }
    if let Some(communities) = &view.communities {
        row(&mut w, &[SECTION, "Communities", &joined(communities)])?;
    }
    if let Some(facets) = &view.linkedin {
        for (label, values) in facets {
            row(&mut w, &[SECTION, &format!("LinkedIn {label}"), &joined(values)])?;
        }
    }
    row(&mut w, &[SECTION, "Placements", &joined(&s.placements)])?;
    row(&mut w, &[SECTION, "Exclusions", &joined(&s.exclusions)])?;
    if !s.platform_notes.is_empty() {
        row(&mut w, &[SECTION, "Platform Notes", &s.platform_notes])?;
    }
    if let Some(budget) = view.budget {
        row(&mut w, &[SECTION, "Daily Budget Minimum", &budget.daily_min])?;
        row(&mut w, &[SECTION, "Test Duration", &budget.test_duration])?;
    }
    finish(w)
}

fn ad_copy_table(view: &AdCopyView<'_>) -> Result<String, ReportError> {
    let mut w = table_writer();
    match view {
        AdCopyView::Search(groups) => {
            row(&mut w, &[
                "Section",
                "Audience Segment",
                "Keywords",
                "Headline/Description",
                "Text",
                "Char Count",
                "Over Limit",
            ])?;
            for group in groups {
                let keywords = joined(&group.group.target_keywords);
                let assets = group
                    .headlines
                    .iter()
                    .map(|a| ("Headline", a))
                    .chain(group.descriptions.iter().map(|a| ("Description", a)));
                for (kind, asset) in assets {
                    row(&mut w, &[
                        "Search Ad",
                        &group.group.audience_segment,
                        &keywords,
                        kind,
                        &asset.asset.text,
                        &asset.char_len.to_string(),
                        if asset.over_limit { "yes" } else { "no" },
                    ])?;
                }
            }
        }
        AdCopyView::Generic(copies) => {
            row(&mut w, &[
                "Section",
                "Audience Segment",
                "Platform Format",
                "Variation",
                "Headline",
                "Hook",
                "Primary Text",
                "CTA",
                "Testing Variable",
            ])?;
            for copy in *copies {
                for (i, ad) in copy.ads.iter().enumerate() {
                    row(&mut w, &[
                        "Ad Copy",
                        &copy.audience_segment,
                        &copy.platform_format,
                        &(i + 1).to_string(),
                        &ad.headline,
                        &ad.hook,
                        &ad.primary_text,
                        &ad.cta,
                        &ad.testing_variable,
                    ])?;
                }
            }
        }
    }
    finish(w)
}

#[cfg(test)]
#[path = "csv_report_test.rs"]
mod tests;

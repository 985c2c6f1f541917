//! Strategy documents shared by the unit tests.

use wavelength_core::{
    AdCopy, AdVariation, AnalysisResult, AudiencePriority, AudienceType, BudgetRecommendation,
    BuyerAwareness, Confidence, Demographics, FunnelStage, Icp, IcpType, LinkedinTargeting,
    Psychographics, SearchAdGroup, SearchAsset, TargetingStrategy, WebsiteAnalysis,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn icp(name: &str, kind: IcpType) -> Icp {
    Icp {
        name: name.to_string(),
        kind,
        demographics: Demographics {
            age_range: "28-45".to_string(),
            gender: "Any".to_string(),
            location: "US, Canada".to_string(),
            income: "$80k-$150k".to_string(),
            education: "Bachelor's".to_string(),
        },
        psychographics: Psychographics {
            values: strings(&["Efficiency", "Craft"]),
            interests: strings(&["SaaS tools", "Customer experience"]),
            lifestyle: "Remote-first, always on Slack".to_string(),
        },
        job_titles: strings(&["Support Lead", "Head of CX"]),
        behavioral_traits: strings(&["Trials tools before buying"]),
        pain_points: strings(&["Tickets fall through the cracks", "Shared Gmail chaos"]),
        emotional_drivers: strings(&["Being on top of things"]),
        reasoning: "Feels the pain daily and owns the budget".to_string(),
    }
}

/// A Meta result whose targeting also carries keyword, community, and
/// LinkedIn data that must stay hidden.
pub(crate) fn meta_result() -> AnalysisResult {
    AnalysisResult {
        website_analysis: WebsiteAnalysis {
            value_proposition: "Answer every ticket, together".to_string(),
            problem_solved: "Support email, chat, and DMs scattered across tools".to_string(),
            target_customer_type: "Small support teams".to_string(),
            industry: "B2B SaaS".to_string(),
            pricing_signals: "Per-seat, free trial".to_string(),
            buyer_awareness_level: BuyerAwareness::SolutionAware,
            confidence: Confidence::Medium,
            assumptions: strings(&["Pricing page was not scraped"]),
        },
        icps: vec![
            icp("Scaling startups", IcpType::Primary),
            icp("Agencies", IcpType::Secondary),
            icp("Enterprise IT", IcpType::Avoid),
        ],
        targeting_strategy: Some(TargetingStrategy {
            platform: "meta".to_string(),
            audience_types: vec![AudienceType {
                kind: "Lookalike 1%".to_string(),
                description: "Seed from trial signups".to_string(),
                priority: AudiencePriority::Primary,
            }],
            interests: strings(&["Zendesk", "Intercom"]),
            behaviors: strings(&["Small business owners"]),
            keywords: Some(strings(&["helpdesk software"])),
            communities: Some(strings(&["CustomerSuccess"])),
            linkedin_targeting: Some(LinkedinTargeting {
                job_titles: strings(&["Support Lead"]),
                ..LinkedinTargeting::default()
            }),
            placements: strings(&["Feed", "Reels"]),
            exclusions: strings(&["Existing customers"]),
            funnel_stage: FunnelStage::Cold,
            funnel_reasoning: "New category, low awareness".to_string(),
            platform_notes: "Lead with UGC-style video.".to_string(),
            budget_recommendation: Some(BudgetRecommendation {
                daily_min: "$50".to_string(),
                test_duration: "7-14 days".to_string(),
            }),
        }),
        ad_copy: vec![AdCopy {
            audience_segment: "Scaling startups".to_string(),
            platform_format: "Meta Feed Ad".to_string(),
            ads: vec![
                AdVariation {
                    headline: "Your inbox, finally shared".to_string(),
                    hook: "Still forwarding tickets?".to_string(),
                    primary_text: "One inbox for email, chat, and DMs.\nSet up in 5 minutes."
                        .to_string(),
                    cta: "Start free trial".to_string(),
                    testing_variable: "Pain-led hook".to_string(),
                },
                AdVariation {
                    headline: "\"Zero missed tickets\"".to_string(),
                    hook: "What 40 teams said, in one line".to_string(),
                    primary_text: "Social proof, fast.".to_string(),
                    cta: "See how".to_string(),
                    testing_variable: "Testimonial hook".to_string(),
                },
            ],
            success_signals: strings(&["CTR > 1.5%", "CPC < $2"]),
        }],
        search_ad_copy: None,
        scraped_content: None,
    }
}

fn asset(text: &str) -> SearchAsset {
    SearchAsset {
        text: text.to_string(),
        char_count: u32::try_from(text.chars().count()).unwrap_or(u32::MAX),
        search_term_included: None,
    }
}

/// A Google result with search assets, one headline over the limit, and
/// generic ad copy that must not be shown.
pub(crate) fn google_result() -> AnalysisResult {
    let mut result = meta_result();
    if let Some(targeting) = result.targeting_strategy.as_mut() {
        targeting.platform = "google".to_string();
    }
    result.search_ad_copy = Some(vec![SearchAdGroup {
        audience_segment: "Scaling startups".to_string(),
        headlines: vec![
            asset("Shared Inbox for Support"),
            asset("The Helpdesk Your Team Will Actually Use"),
        ],
        descriptions: vec![asset(
            "One inbox for email, chat, and DMs. Set up in 5 minutes, no credit card.",
        )],
        target_keywords: strings(&["shared inbox", "helpdesk software"]),
        display_path: strings(&["helpdesk", "trial"]),
        testing_notes: "Pin the brand headline first.".to_string(),
    }]);
    result
}

//! Prompt text sent to the chat-completion endpoint.
//!
//! The system prompt pins the JSON shape that [`wavelength_core::AnalysisResult`]
//! deserializes; field names here and there must stay in step.

use std::fmt::Write as _;

use wavelength_core::AnalysisInput;

const SYSTEM_PROMPT: &str = r#"You are a world-class performance marketing strategist with 15+ years of experience running paid acquisition for high-growth startups and Fortune 500 companies. You think like a CMO but execute like a media buyer.

Your task is to analyze a website and product, then provide strategic marketing insights. Be opinionated, specific, and actionable. Avoid generic advice. Every recommendation should be immediately implementable.

When you're uncertain about something, explicitly state your confidence level and the assumptions you're making.

Respond ONLY with valid JSON matching this exact structure:
{
  "websiteAnalysis": {
    "valueProposition": "string - The core value proposition in one clear sentence",
    "problemSolved": "string - The specific problem this product solves",
    "targetCustomerType": "string - Who this product is primarily for",
    "industry": "string - The industry/vertical",
    "pricingSignals": "string - What pricing tier or model is indicated",
    "buyerAwarenessLevel": "unaware" | "problem-aware" | "solution-aware" | "product-aware" | "most-aware",
    "confidence": "high" | "medium" | "low",
    "assumptions": ["array of strings - explicit assumptions made during analysis"]
  },
  "icps": [
    {
      "name": "string - Descriptive name for this segment",
      "type": "primary" | "secondary" | "avoid",
      "demographics": {
        "ageRange": "string",
        "gender": "string",
        "location": "string",
        "income": "string",
        "education": "string"
      },
      "psychographics": {
        "values": ["array of 2-3 core values"],
        "interests": ["array of 3-5 interests"],
        "lifestyle": "string description"
      },
      "jobTitles": ["array of 3-5 relevant job titles"],
      "behavioralTraits": ["array of 3-4 behavioral patterns"],
      "painPoints": ["array of 3-5 specific pain points"],
      "emotionalDrivers": ["array of 2-4 emotional motivators"],
      "reasoning": "string - Why this ICP is classified as primary/secondary/avoid"
    }
  ],
  "targetingStrategy": {
    "platform": "string - the platform being targeted (meta, tiktok, youtube, reddit, linkedin, google)",
    "audienceTypes": [
      {
        "type": "string - e.g., 'Lookalike 1%', 'Interest Stack', 'Broad with exclusions'",
        "description": "string - detailed description of how to set this up",
        "priority": "primary" | "test"
      }
    ],
    "interests": ["array of 5-10 specific platform interests to target"],
    "behaviors": ["array of 3-6 behavioral targeting options available on this platform"],
    "keywords": ["array of 5-10 keywords - only for Google, YouTube or Reddit, otherwise empty array"],
    "communities": ["array of subreddit names without the r/ prefix - only for Reddit, otherwise empty array"],
    "linkedinTargeting": {
      "jobTitles": ["array of job titles"],
      "skills": ["array of member skills"],
      "companies": ["array of target companies or company-size bands"],
      "industries": ["array of industries"],
      "groups": ["array of LinkedIn groups"]
    },
    "placements": ["array of 3-5 specific ad placements for this platform"],
    "exclusions": ["array of 3-5 audiences/behaviors to exclude"],
    "funnelStage": "cold" | "warm" | "retargeting",
    "funnelReasoning": "string - explain why this funnel stage is recommended based on the product/market",
    "platformNotes": "string - 2-3 sentences of platform-specific tactical advice",
    "budgetRecommendation": {
      "dailyMin": "string - minimum daily budget recommendation, e.g., '$50'",
      "testDuration": "string - recommended test period, e.g., '7-14 days'"
    }
  },
  "adCopy": [
    {
      "audienceSegment": "string - Which ICP this targets",
      "platformFormat": "string - e.g., 'Meta Feed Ad' or 'TikTok In-Feed Video'",
      "ads": [
        {
          "headline": "string - Attention-grabbing headline",
          "hook": "string - Opening hook (first 1-2 sentences)",
          "primaryText": "string - Main ad body (2-4 sentences)",
          "cta": "string - Call to action",
          "testingVariable": "string - What this variation tests"
        }
      ],
      "successSignals": ["array of 3-4 metrics to watch, e.g., 'CTR > 2%', 'CPC < $1.50'"]
    }
  ],
  "searchAdCopy": [
    {
      "audienceSegment": "string - Which ICP this ad group targets",
      "headlines": [
        { "text": "string - at most 30 characters", "charCount": 0, "searchTermIncluded": "string - keyword used, if any" }
      ],
      "descriptions": [
        { "text": "string - at most 90 characters", "charCount": 0 }
      ],
      "targetKeywords": ["array of 5-10 keywords for this ad group"],
      "displayPath": ["up to 2 path segments, e.g., 'crm', 'pricing'"],
      "testingNotes": "string - what to test first and why"
    }
  ]
}

Platform-conditional fields:
- "keywords": fill only for google, youtube and reddit; otherwise return an empty array.
- "communities": fill only for reddit; otherwise return an empty array.
- "linkedinTargeting": include only for linkedin; otherwise omit it.
- "searchAdCopy": include only for google, with 10-15 headlines and 4 descriptions per ad group. Headlines must not exceed 30 characters and descriptions must not exceed 90 characters; set charCount to the exact length. For google, "adCopy" may be an empty array. For every other platform omit "searchAdCopy".

Platform-specific targeting guidance:
- Meta: Focus on Lookalike audiences, interest stacking, Advantage+ options, Feed/Stories/Reels placements
- TikTok: Emphasize interest categories, creator-like content, For You page optimization
- YouTube: Consider in-stream vs discovery, topic targeting, custom intent audiences
- Reddit: Focus on subreddit targeting, interest communities, conversation targeting
- LinkedIn: Prioritize job titles, company size, industry, member skills
- Google: Include keyword themes, custom intent, Performance Max considerations

Provide 1 primary ICP, 1 secondary ICP, and 1 ICP to avoid. For ad copy, provide 2 ads per ICP segment (primary only), with 2-3 test variations. Make the ads platform-native and respect any brand voice guidelines provided."#;

/// Fixed analyst persona and JSON contract.
#[must_use]
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Per-request prompt carrying the user's context and the scraped page.
#[must_use]
pub fn user_prompt(input: &AnalysisInput, content: &str) -> String {
    let mut prompt = String::from(
        "Analyze this website and create a comprehensive marketing strategy.\n\n",
    );
    let _ = writeln!(prompt, "WEBSITE URL: {}\n", input.website_url);
    let _ = writeln!(
        prompt,
        "PRODUCT DESCRIPTION (from the user):\n{}\n",
        input.product_description
    );
    let _ = writeln!(prompt, "PRIMARY ADVERTISING PLATFORM: {}\n", input.platform);
    if input.platform.uses_search_ads() {
        prompt.push_str(
            "AD FORMAT: Responsive Search Ads. Return the ad copy in \"searchAdCopy\".\n\n",
        );
    }
    match input.brand_voice() {
        Some(voice) => {
            let _ = writeln!(prompt, "BRAND VOICE GUIDELINES:\n{voice}\n");
        }
        None => prompt.push_str("No specific brand voice guidelines provided.\n\n"),
    }
    let _ = writeln!(prompt, "SCRAPED WEBSITE CONTENT:\n---\n{content}\n---\n");
    prompt.push_str("Based on all of the above, provide your strategic analysis as JSON.");
    prompt
}

#[cfg(test)]
mod tests {
    use wavelength_core::Platform;

    use super::*;

    fn input(brand_voice: Option<&str>) -> AnalysisInput {
        AnalysisInput {
            website_url: "https://acme.example".to_string(),
            product_description: "Shared inbox for support teams".to_string(),
            platform: Platform::Reddit,
            brand_voice: brand_voice.map(str::to_string),
        }
    }

    #[test]
    fn user_prompt_includes_context_and_fenced_content() {
        let prompt = user_prompt(&input(Some("Playful, no jargon")), "# Acme\nWidgets");
        assert!(prompt.contains("WEBSITE URL: https://acme.example"));
        assert!(prompt.contains("PRIMARY ADVERTISING PLATFORM: reddit"));
        assert!(prompt.contains("BRAND VOICE GUIDELINES:\nPlayful, no jargon"));
        assert!(prompt.contains("---\n# Acme\nWidgets\n---"));
        assert!(prompt.ends_with("provide your strategic analysis as JSON."));
        assert!(!prompt.contains("AD FORMAT"));
    }

    #[test]
    fn user_prompt_asks_google_for_search_assets() {
        let mut google = input(None);
        google.platform = Platform::Google;
        assert!(user_prompt(&google, "content").contains("AD FORMAT: Responsive Search Ads"));
    }

    #[test]
    fn user_prompt_without_brand_voice_says_so() {
        for voice in [None, Some("   ")] {
            let prompt = user_prompt(&input(voice), "content");
            assert!(prompt.contains("No specific brand voice guidelines provided."));
            assert!(!prompt.contains("BRAND VOICE GUIDELINES"));
        }
    }

    #[test]
    fn system_prompt_names_every_contract_section() {
        let prompt = system_prompt();
        for field in [
            "\"websiteAnalysis\"",
            "\"icps\"",
            "\"targetingStrategy\"",
            "\"adCopy\"",
            "\"searchAdCopy\"",
            "\"linkedinTargeting\"",
            "\"budgetRecommendation\"",
        ] {
            assert!(prompt.contains(field), "system prompt is missing {field}");
        }
    }
}

use super::*;

fn raw(url: &str, description: &str, platform: &str) -> RawAnalysisInput {
    RawAnalysisInput {
        website_url: Some(url.to_string()),
        product_description: Some(description.to_string()),
        platform: Some(platform.to_string()),
        brand_voice: None,
    }
}

#[test]
fn normalize_url_prefixes_bare_host() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("  example.com/pricing "), "https://example.com/pricing");
}

#[test]
fn normalize_url_keeps_existing_scheme() {
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("https://example.com"), "https://example.com");
    assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
}

#[test]
fn normalize_url_prefixes_exactly_once() {
    let once = normalize_url("example.com");
    assert_eq!(normalize_url(&once), once);
    assert_eq!(once.matches("https://").count(), 1);
}

#[test]
fn plausible_url_accepts_short_hosts_and_full_urls() {
    assert!(is_plausible_url("a.io"));
    assert!(is_plausible_url("https://x"));
    assert!(!is_plausible_url("ab"));
    assert!(!is_plausible_url("   "));
}

#[test]
fn validate_accepts_and_normalizes() {
    let input = raw("acme.io", "Invoicing for freelancers", "meta")
        .validate()
        .expect("valid input");
    assert_eq!(input.website_url, "https://acme.io");
    assert_eq!(input.platform, Platform::Meta);
}

#[test]
fn validate_rejects_short_description() {
    let err = raw("acme.io", "CRM", "meta").validate().unwrap_err();
    let InputError::Invalid(errors) = err else {
        panic!("expected Invalid, got {err:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "productDescription");
}

#[test]
fn validate_reports_every_failing_field() {
    let err = RawAnalysisInput {
        website_url: Some("x".to_string()),
        product_description: None,
        platform: Some("myspace".to_string()),
        brand_voice: None,
    }
    .validate()
    .unwrap_err();

    let InputError::Invalid(errors) = &err else {
        panic!("expected Invalid, got {err:?}");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["websiteUrl", "productDescription", "platform"]);
    assert!(err.to_string().contains("Please enter a website URL"));
}

#[test]
fn require_fields_rejects_blank_values() {
    let err = raw("https://acme.io", "  ", "google")
        .require_fields()
        .unwrap_err();
    assert_eq!(err, InputError::MissingFields);
    assert_eq!(err.to_string(), "Missing required fields");
}

#[test]
fn require_fields_rejects_unknown_platform() {
    let err = raw("https://acme.io", "Invoicing for freelancers", "snapchat")
        .require_fields()
        .unwrap_err();
    assert_eq!(err, InputError::UnknownPlatform("snapchat".to_string()));
}

#[test]
fn require_fields_passes_values_through() {
    let input = RawAnalysisInput {
        brand_voice: Some("Plainspoken".to_string()),
        ..raw("acme.io", "short", "reddit")
    }
    .require_fields()
    .expect("all fields present");
    assert_eq!(input.website_url, "acme.io");
    assert_eq!(input.product_description, "short");
    assert_eq!(input.brand_voice(), Some("Plainspoken"));
}

#[test]
fn require_valid_keeps_missing_fields_distinct() {
    let mut partial = raw("https://acme.io", "Invoicing for freelancers", "google");
    partial.platform = None;
    assert_eq!(partial.require_valid().unwrap_err(), InputError::MissingFields);
}

#[test]
fn require_valid_rejects_present_but_invalid_fields() {
    let err = raw("a", "hi", "reddit").require_valid().unwrap_err();
    let InputError::Invalid(errors) = &err else {
        panic!("expected field errors, got {err:?}");
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["websiteUrl", "productDescription"]);
    assert!(err
        .to_string()
        .contains("Please provide at least 10 characters describing your product"));
}

#[test]
fn require_valid_normalizes_bare_host() {
    let input = raw(" acme.io ", "Invoicing for freelancers", "linkedin")
        .require_valid()
        .expect("valid submission");
    assert_eq!(input.website_url, "https://acme.io");
    assert_eq!(input.platform, Platform::Linkedin);
}

#[test]
fn raw_input_deserializes_camel_case() {
    let raw: RawAnalysisInput = serde_json::from_str(
        r#"{"websiteUrl":"acme.io","productDescription":"Invoicing tool","platform":"google"}"#,
    )
    .expect("parse");
    assert_eq!(raw.website_url.as_deref(), Some("acme.io"));
    assert!(raw.brand_voice.is_none());
}

#[test]
fn blank_brand_voice_is_treated_as_absent() {
    let input = AnalysisInput {
        website_url: "https://acme.io".to_string(),
        product_description: "Invoicing tool".to_string(),
        platform: Platform::Meta,
        brand_voice: Some("   ".to_string()),
    };
    assert!(input.brand_voice().is_none());
}

use pagevisits_domain::{PageCounts, VisitSubmission};

fn submission(url: &str) -> VisitSubmission {
    VisitSubmission::for_url(url)
}

#[test]
fn test_normalize_minimal_defaults_counts_to_zero() {
    let visit = submission("https://example.com/").normalize().unwrap();

    assert_eq!(visit.url.as_str(), "https://example.com");
    assert!(visit.title.is_none());
    assert!(visit.description.is_none());
    assert_eq!(visit.counts, PageCounts::default());
    assert!(visit.visited_at.is_none());
}

#[test]
fn test_normalize_full_submission() {
    let sub = VisitSubmission {
        url: "https://example.com/article#comments".to_string(),
        title: Some("  An   article ".to_string()),
        description: Some("About things".to_string()),
        link_count: Some(12),
        word_count: Some(3400),
        image_count: Some(3),
    };

    let visit = sub.normalize().unwrap();
    assert_eq!(visit.url.as_str(), "https://example.com/article");
    assert_eq!(visit.title.as_deref(), Some("An article"));
    assert_eq!(visit.description.as_deref(), Some("About things"));
    assert_eq!(visit.counts, PageCounts::new(12, 3400, 3));
}

#[test]
fn test_script_title_is_escaped() {
    let mut sub = submission("https://example.com");
    sub.title = Some("  <script>alert(1)</script>  ".to_string());

    let visit = sub.normalize().unwrap();
    let title = visit.title.unwrap();
    assert_eq!(title.as_ref(), "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert!(!title.contains('<'));
    assert!(!title.contains('>'));
}

#[test]
fn test_whitespace_only_text_becomes_absent() {
    let mut sub = submission("https://example.com");
    sub.title = Some("   \t\n ".to_string());
    sub.description = Some(String::new());

    let visit = sub.normalize().unwrap();
    assert!(visit.title.is_none());
    assert!(visit.description.is_none());
}

#[test]
fn test_nul_bytes_removed() {
    let mut sub = submission("https://example.com");
    sub.title = Some("Hel\0lo".to_string());

    let visit = sub.normalize().unwrap();
    assert_eq!(visit.title.as_deref(), Some("Hello"));
}

#[test]
fn test_title_at_limit_accepted() {
    let mut sub = submission("https://example.com");
    sub.title = Some("t".repeat(500));
    assert!(sub.normalize().is_ok());
}

#[test]
fn test_title_over_limit_rejected() {
    let mut sub = submission("https://example.com");
    sub.title = Some("t".repeat(501));

    let err = sub.normalize().unwrap_err();
    assert!(err.has("title", "too_long"));
}

#[test]
fn test_description_over_limit_rejected() {
    let mut sub = submission("https://example.com");
    sub.description = Some("d".repeat(2001));

    let err = sub.normalize().unwrap_err();
    assert!(err.has("description", "too_long"));
}

#[test]
fn test_count_bounds() {
    let mut sub = submission("https://example.com");
    sub.link_count = Some(100_000);
    sub.word_count = Some(10_000_000);
    sub.image_count = Some(100_000);
    assert!(sub.normalize().is_ok());

    sub.link_count = Some(100_001);
    sub.word_count = Some(10_000_001);
    sub.image_count = Some(-1);
    let err = sub.normalize().unwrap_err();
    assert!(err.has("link_count", "too_large"));
    assert!(err.has("word_count", "too_large"));
    assert!(err.has("image_count", "negative"));
}

#[test]
fn test_all_violations_reported_together() {
    let sub = VisitSubmission {
        url: "not-a-url".to_string(),
        title: Some("x".repeat(600)),
        description: Some("y".repeat(2500)),
        link_count: Some(-5),
        word_count: Some(20_000_000),
        image_count: Some(-1),
    };

    let err = sub.normalize().unwrap_err();
    assert_eq!(err.len(), 6);
    assert_eq!(
        err.codes(),
        vec!["url_invalid", "too_long", "too_long", "negative", "too_large", "negative"]
    );
}

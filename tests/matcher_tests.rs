//! Integration tests for the matching contract over a realistic provider list

use disposable_domains::matcher::{DisposableMatcher, DomainMatcher, MatchKind, WildcardIndex};
use disposable_domains::DomainSets;

/// Providers that rotate subdomains, published as wildcard roots
fn get_wildcard_providers() -> Vec<String> {
    vec![
        "10minutemail.com",
        "guerrillamail.com",
        "mailinator.com",
        "sharklasers.com",
        "temp-mail.org",
        "tempmail.co.uk",
        "yopmail.fr",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Single-host providers, published as exact entries
fn get_exact_providers() -> Vec<String> {
    vec![
        "0-mail.com",
        "dispostable.com",
        "fakeinbox.com",
        "getnada.com",
        "maildrop.cc",
        "mohmal.com",
        "throwawaymail.com",
        "trashmail.de",
        "yopmail.com",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn matcher() -> DisposableMatcher {
    DisposableMatcher::from_sets(&DomainSets::new(
        get_exact_providers(),
        get_wildcard_providers(),
    ))
}

#[test]
fn test_exact_entries() {
    let m = matcher();

    for domain in get_exact_providers() {
        assert_eq!(
            m.classify(&domain),
            Some(MatchKind::Exact),
            "{} should match exactly",
            domain
        );
    }

    assert!(
        !m.is_disposable("www.yopmail.com"),
        "exact entries must not cover subdomains"
    );
    assert!(
        !m.is_disposable("mx.maildrop.cc"),
        "exact entries must not cover subdomains"
    );
}

#[test]
fn test_wildcard_roots_and_subdomains() {
    let m = matcher();

    for root in get_wildcard_providers() {
        assert_eq!(
            m.classify(&root),
            Some(MatchKind::WildcardRoot),
            "{} should match as a wildcard root",
            root
        );
        let sub = format!("x1y2.{}", root);
        assert_eq!(
            m.classify(&sub),
            Some(MatchKind::WildcardSubdomain),
            "{} should match as a wildcard subdomain",
            sub
        );
    }

    assert!(
        m.is_disposable("a.b.c.mailinator.com"),
        "deep subdomains should match"
    );
}

#[test]
fn test_boundary_non_matches() {
    let m = matcher();

    let legit = [
        "notmailinator.com",
        "evilmailinator.com",
        "mailinator.com.example.net",
        "guerrillamail.org",
        "mytempmail.co.uk",
        "co.uk",
        "com",
        "gmail.com",
        "outlook.com",
    ];
    for domain in legit {
        assert!(!m.is_disposable(domain), "{} should NOT match", domain);
    }
}

#[test]
fn test_email_addresses() {
    let m = matcher();

    assert!(m.is_disposable("john.doe@mailinator.com"));
    assert!(m.is_disposable("JOHN@Inbox.Guerrillamail.COM"));
    assert!(m.is_disposable("jane@getnada.com"));
    assert!(!m.is_disposable("jane@gmail.com"));
    assert!(!m.is_disposable("jane@sub.getnada.com"));
}

#[test]
fn test_trait_object_dispatch() {
    let matchers: Vec<Box<dyn DomainMatcher>> = vec![
        Box::new(matcher()),
        Box::new(WildcardIndex::new(get_wildcard_providers())),
    ];

    for m in &matchers {
        assert!(m.matches("inbox.sharklasers.com"));
        assert!(!m.matches("sharklasers.com.evil"));
    }
}

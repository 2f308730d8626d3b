//! FQDN syntax validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// One DNS label: 1-63 of `[a-z0-9-]`, no hyphen at either end
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$")
        .expect("LABEL_PATTERN: hardcoded regex is invalid")
});

/// Maximum length of a domain name in text form
pub const MAX_DOMAIN_LEN: usize = 253;

/// Check that `domain` is a syntactically valid fully-qualified domain name.
///
/// Expects lowercase input: uppercase letters are rejected rather than
/// folded, so normalization must run first.
pub fn is_valid_fqdn(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    if !labels.iter().all(|label| LABEL_PATTERN.is_match(label)) {
        return false;
    }

    // An all-numeric final label is an IPv4 address, not a TLD
    labels
        .last()
        .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}

/// Output of the validation stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    /// Entries that passed, order preserved
    pub valid: Vec<String>,
    /// Entries that failed, order preserved
    pub invalid: Vec<String>,
}

/// Partition `domains` into valid and invalid FQDNs.
pub fn validate<S: AsRef<str>>(domains: &[S]) -> Validated {
    let mut out = Validated::default();

    for domain in domains {
        let domain = domain.as_ref();
        if is_valid_fqdn(domain) {
            out.valid.push(domain.to_string());
        } else {
            tracing::warn!(domain = %domain, "not a valid FQDN, removing");
            out.invalid.push(domain.to_string());
        }
    }

    out
}

use std::collections::HashSet;

use super::{DomainMatcher, WildcardIndex};
use crate::types::DomainSets;

/// Which list produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Equal to an exact-set entry
    Exact,
    /// Equal to a wildcard-set entry
    WildcardRoot,
    /// Dot-delimited subdomain of a wildcard-set entry
    WildcardSubdomain,
}

/// Lookup side of the published lists.
///
/// A candidate is disposable iff it equals an exact entry, equals a wildcard
/// entry, or is a dot-delimited subdomain of a wildcard entry. Candidates may
/// be bare domains or full email addresses; the part after the last `@` is
/// used.
#[derive(Debug, Clone, Default)]
pub struct DisposableMatcher {
    exact: HashSet<String>,
    wildcard: WildcardIndex,
}

impl DisposableMatcher {
    pub fn new<E, W, S, T>(exact: E, wildcard: W) -> Self
    where
        E: IntoIterator<Item = S>,
        W: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            exact: exact
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            wildcard: WildcardIndex::new(wildcard),
        }
    }

    pub fn from_sets(sets: &DomainSets) -> Self {
        Self::new(&sets.exact, &sets.wildcard)
    }

    /// Classify `candidate`, or `None` if it is not disposable.
    pub fn classify(&self, candidate: &str) -> Option<MatchKind> {
        let domain = candidate_domain(candidate);
        // Leading dots and empty labels would otherwise match a parent root
        if domain.is_empty() || domain.split('.').any(str::is_empty) {
            return None;
        }

        if self.exact.contains(&domain) {
            return Some(MatchKind::Exact);
        }

        match self.wildcard.covering_root(&domain) {
            Some(root) if root.len() == domain.len() => Some(MatchKind::WildcardRoot),
            Some(_) => Some(MatchKind::WildcardSubdomain),
            None => None,
        }
    }

    pub fn is_disposable(&self, candidate: &str) -> bool {
        self.classify(candidate).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wildcard.is_empty()
    }
}

impl DomainMatcher for DisposableMatcher {
    fn matches(&self, domain: &str) -> bool {
        self.is_disposable(domain)
    }
}

/// Domain part of an address or bare domain, lowercased and trimmed.
fn candidate_domain(candidate: &str) -> String {
    let candidate = candidate.trim();
    let domain = match candidate.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => candidate,
    };
    domain.trim_end_matches('.').to_lowercase()
}

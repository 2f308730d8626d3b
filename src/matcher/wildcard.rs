//! Wildcard root index.
//!
//! Stores wildcard roots in a HashSet and walks a candidate domain up its
//! label hierarchy, one O(1) lookup per level. Matching is always anchored
//! at a dot, so `mailinator.com` covers `sub.mailinator.com` but never
//! `evilmailinator.com`.

use std::collections::HashSet;

use super::DomainMatcher;
use crate::normalizer::strip_wildcard_marker;

/// Set of wildcard roots, each matching itself and all of its subdomains
#[derive(Debug, Clone, Default)]
pub struct WildcardIndex {
    roots: HashSet<String>,
}

impl WildcardIndex {
    /// Build an index from wildcard roots.
    ///
    /// Roots are lowercased; a leading `*.` or `.` is stripped.
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roots = roots
            .into_iter()
            .filter_map(|root| {
                let root = strip_wildcard_marker(root.as_ref()).to_lowercase();
                (!root.is_empty()).then_some(root)
            })
            .collect();
        Self { roots }
    }

    /// Wildcard root covering `domain`, if any.
    ///
    /// Assumes `domain` is already lowercased. The domain itself is checked
    /// first, then each parent in turn.
    pub fn covering_root<'a>(&self, domain: &'a str) -> Option<&'a str> {
        if self.roots.contains(domain) {
            return Some(domain);
        }

        let mut pos = 0;
        while let Some(dot_pos) = domain[pos..].find('.') {
            let parent = &domain[pos + dot_pos + 1..];
            if self.roots.contains(parent) {
                return Some(parent);
            }
            pos += dot_pos + 1;
        }

        None
    }

    pub fn covers(&self, domain: &str) -> bool {
        self.covering_root(domain).is_some()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl DomainMatcher for WildcardIndex {
    fn matches(&self, domain: &str) -> bool {
        self.covers(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let index = WildcardIndex::new(Vec::<String>::new());
        assert!(index.is_empty());
        assert!(!index.covers("mailinator.com"));
    }

    #[test]
    fn test_root_covers_itself_and_subdomains() {
        let index = WildcardIndex::new(["mailinator.com"]);

        assert!(index.covers("mailinator.com"));
        assert!(index.covers("sub.mailinator.com"));
        assert!(index.covers("a.b.c.mailinator.com"));
        assert_eq!(index.covering_root("x.mailinator.com"), Some("mailinator.com"));
    }

    #[test]
    fn test_no_false_positives() {
        let index = WildcardIndex::new(["mailinator.com"]);

        assert!(!index.covers("evilmailinator.com"));
        assert!(!index.covers("evil-mailinator.com"));
        assert!(!index.covers("mailinator.com.evil.net"));
        assert!(!index.covers("mailinator.org"));
        assert!(!index.covers("com"));
    }

    #[test]
    fn test_wildcard_prefix_stripped() {
        let index = WildcardIndex::new(["*.Guerrillamail.com", ".sharklasers.com", "  "]);

        assert_eq!(index.len(), 2);
        assert!(index.covers("guerrillamail.com"));
        assert!(index.covers("www.sharklasers.com"));
    }

    #[test]
    fn test_nearest_root_reported() {
        let index = WildcardIndex::new(["example.com", "mail.example.com"]);
        assert_eq!(
            index.covering_root("a.mail.example.com"),
            Some("mail.example.com")
        );
    }
}

//! Removal of exact entries already covered by a wildcard root.

use crate::matcher::WildcardIndex;

/// Whether `wildcard_root` covers `domain`.
///
/// True when the two are equal or `domain` ends with `"." + wildcard_root`.
/// A bare string suffix is never enough: `evil-w.com` is not covered by
/// `w.com`.
pub fn is_covered(domain: &str, wildcard_root: &str) -> bool {
    match domain.strip_suffix(wildcard_root) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

/// Output of the coverage stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reduced {
    /// Exact entries with no covering wildcard, order preserved
    pub exact: Vec<String>,
    /// Entries dropped, in input order
    pub covered: Vec<String>,
}

/// Drop every exact entry covered by a wildcard entry.
///
/// The wildcard set itself is not touched.
pub fn reduce<E, W>(exact: &[E], wildcard: &[W]) -> Reduced
where
    E: AsRef<str>,
    W: AsRef<str>,
{
    let index = WildcardIndex::new(wildcard);
    let mut out = Reduced::default();

    for domain in exact {
        let domain = domain.as_ref();
        match index.covering_root(domain) {
            Some(root) => {
                tracing::debug!(domain = %domain, root = %root, "covered by wildcard");
                out.covered.push(domain.to_string());
            }
            None => out.exact.push(domain.to_string()),
        }
    }

    out
}

//! TLD table and root-domain extraction.
//!
//! Extraction is a greedy longest-suffix match: a domain is tested against
//! every known TLD and the longest one it ends with (at a label boundary)
//! wins, so `mail.example.co.uk` resolves to `co.uk` even though `uk` also
//! matches.
//!
//! ## Example
//!
//! ```
//! use disposable_domains::tld::TldTable;
//!
//! let table = TldTable::new(["com", "uk", "co.uk"]);
//!
//! let extracted = table.extract("a.b.mailinator.com").unwrap();
//! assert_eq!(extracted.tld, "com");
//! assert_eq!(extracted.sld, "mailinator");
//! assert_eq!(extracted.root_domain, "mailinator.com");
//!
//! let extracted = table.extract("mail.example.co.uk").unwrap();
//! assert_eq!(extracted.root_domain, "example.co.uk");
//!
//! assert!(table.extract("localhost").is_none());
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{DomainListError, Result};
use crate::types::ExtractedDomain;

const BUILTIN_TABLE: &str = include_str!("builtin.dat");

static BUILTIN: Lazy<TldTable> = Lazy::new(|| {
    TldTable::parse(BUILTIN_TABLE).expect("BUILTIN: bundled TLD table is invalid")
});

/// Immutable set of known TLDs, iterated longest-first.
#[derive(Debug, Clone, Default)]
pub struct TldTable {
    /// Descending byte length, ties broken lexicographically
    ordered: Vec<String>,
    /// Same entries, for one lookup per domain level
    index: HashSet<String>,
}

impl TldTable {
    /// Build a table from TLD strings.
    ///
    /// Entries are lowercased, stripped of a leading dot and deduplicated.
    /// Empty entries are ignored. Labels are not checked; use
    /// [`TldTable::try_new`] for untrusted entries.
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = HashSet::new();
        for tld in tlds {
            let tld = tld.as_ref().trim().trim_start_matches('.').to_lowercase();
            if !tld.is_empty() {
                index.insert(tld);
            }
        }

        let mut ordered: Vec<String> = index.iter().cloned().collect();
        ordered.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self { ordered, index }
    }

    /// Build a table from TLD strings, rejecting malformed suffixes.
    ///
    /// The error carries the 1-based position of the first bad entry.
    pub fn try_new<I, S>(tlds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (pos, tld) in tlds.into_iter().enumerate() {
            let tld = tld.as_ref().trim();
            if tld.is_empty() {
                continue;
            }
            let rule = tld.trim_start_matches('.').to_ascii_lowercase();
            if !is_valid_suffix(&rule) {
                return Err(DomainListError::TldTable {
                    line: pos + 1,
                    message: format!("Invalid suffix: {}", tld),
                });
            }
            entries.push(rule);
        }
        Ok(Self::new(entries))
    }

    /// Parse a table from text.
    ///
    /// One suffix per line; `//` and `#` comments and blank lines are ignored.
    /// Public-suffix-list syntax is tolerated: a leading `*.` is stripped,
    /// `!` exception rules and non-ASCII entries are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let line_num = line_num + 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
                continue;
            }

            // Rule is the first whitespace-delimited token
            let rule = line.split_whitespace().next().unwrap_or_default();
            if rule.starts_with('!') || !rule.is_ascii() {
                continue;
            }

            let rule = rule
                .strip_prefix("*.")
                .unwrap_or(rule)
                .trim_start_matches('.')
                .to_ascii_lowercase();

            if !is_valid_suffix(&rule) {
                return Err(DomainListError::TldTable {
                    line: line_num,
                    message: format!("Invalid suffix: {}", line),
                });
            }

            entries.push(rule);
        }

        Ok(Self::new(entries))
    }

    /// Read and parse a table file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DomainListError::load(path, e))?;
        Self::parse(&text).map_err(|e| DomainListError::load(path, e))
    }

    /// The table bundled with the crate.
    pub fn builtin() -> &'static TldTable {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.index.contains(tld)
    }

    /// Entries in match-priority order (longest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Longest table entry that `domain` ends with, preceded by a dot.
    ///
    /// Walks the domain's label suffixes from longest to shortest, one set
    /// lookup per level. The whole domain is never a candidate: a TLD needs
    /// at least one label in front of it.
    pub fn longest_match<'a>(&self, domain: &'a str) -> Option<&'a str> {
        let mut pos = 0;
        while let Some(dot_pos) = domain[pos..].find('.') {
            let suffix = &domain[pos + dot_pos + 1..];
            if self.index.contains(suffix) {
                return Some(suffix);
            }
            pos += dot_pos + 1;
        }
        None
    }

    /// Reference scan over the ordered table, first hit wins.
    pub fn longest_match_linear(&self, domain: &str) -> Option<&str> {
        self.iter().find(|tld| {
            domain.len() > tld.len()
                && domain.ends_with(tld)
                && domain.as_bytes()[domain.len() - tld.len() - 1] == b'.'
        })
    }

    /// Split `domain` into TLD, second-level label and root domain.
    ///
    /// Returns `None` for domains with no derivable root: a single label, or
    /// an empty label next to the TLD.
    pub fn extract(&self, domain: &str) -> Option<ExtractedDomain> {
        let tld = match self.longest_match(domain) {
            Some(tld) => tld,
            // Unknown suffix: the final label stands in for the TLD
            None => domain.rsplit_once('.')?.1,
        };
        split_at_tld(domain, tld)
    }

    /// Same as [`extract`](Self::extract), using the linear reference scan.
    pub fn extract_linear(&self, domain: &str) -> Option<ExtractedDomain> {
        let tld = match self.longest_match_linear(domain) {
            Some(tld) => tld,
            None => domain.rsplit_once('.')?.1,
        };
        split_at_tld(domain, tld)
    }
}

fn split_at_tld(domain: &str, tld: &str) -> Option<ExtractedDomain> {
    if tld.is_empty() || domain.len() <= tld.len() {
        return None;
    }

    let rest = &domain[..domain.len() - tld.len() - 1];
    let sld = match rest.rsplit_once('.') {
        Some((_, last)) => last,
        None => rest,
    };
    if sld.is_empty() {
        return None;
    }

    Some(ExtractedDomain::new(tld, sld))
}

/// Non-empty labels of letters, digits and hyphens only.
fn is_valid_suffix(rule: &str) -> bool {
    rule.split('.').all(|label| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

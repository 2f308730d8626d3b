//! Grouping by root domain and collapsing of sibling subdomains.
//!
//! A group is every listed domain sharing one root. The collapse policy
//! decides per group whether its members stay as listed or are replaced by
//! the root alone:
//!
//! | Group shape | Single-list mode | Split mode |
//! |-------------|------------------|------------|
//! | root listed + subdomains | root (exact) | root (wildcard) |
//! | >= threshold subdomains, no root | root (exact) | root (wildcard) |
//! | anything else | unchanged | unchanged |

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::normalizer::sort_dedup;
use crate::tld::TldTable;

/// Threshold used when everything lands in one list
pub const SINGLE_LIST_THRESHOLD: usize = 3;

/// Threshold used when collapsed roots move to the wildcard set
pub const SPLIT_THRESHOLD: usize = 2;

/// Root domain -> every listed domain under it (root included if listed)
pub type DomainGroups = BTreeMap<String, BTreeSet<String>>;

/// Parameters of the collapse stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapsePolicy {
    /// Minimum number of unrooted subdomains that collapses a group
    pub threshold: usize,
    /// Move collapsed roots into the wildcard set
    pub split_mode: bool,
}

impl Default for CollapsePolicy {
    fn default() -> Self {
        Self::split()
    }
}

impl CollapsePolicy {
    /// One output list, T = 3.
    pub fn single_list() -> Self {
        Self {
            threshold: SINGLE_LIST_THRESHOLD,
            split_mode: false,
        }
    }

    /// Exact plus wildcard lists, T = 2.
    pub fn split() -> Self {
        Self {
            threshold: SPLIT_THRESHOLD,
            split_mode: true,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_split_mode(mut self, split_mode: bool) -> Self {
        self.split_mode = split_mode;
        self
    }
}

/// What the policy decided for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    /// Keep every member as listed
    Keep,
    /// Replace the group with its root
    Collapse,
}

impl CollapsePolicy {
    /// Decide the fate of the group under `root`.
    pub fn decide(&self, root: &str, members: &BTreeSet<String>) -> GroupAction {
        let has_explicit_root = members.contains(root);
        let subdomains = members.len() - usize::from(has_explicit_root);

        // A listed root absorbs any subdomain; otherwise the threshold decides
        let collapse = if has_explicit_root {
            subdomains > 0
        } else {
            subdomains >= self.threshold
        };

        if collapse {
            GroupAction::Collapse
        } else {
            GroupAction::Keep
        }
    }
}

/// Output of the collapse stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collapsed {
    pub exact: Vec<String>,
    pub wildcard: Vec<String>,
    /// Domains without an extractable root; also present in `exact`
    pub unprocessable: Vec<String>,
    /// Roots that replaced at least one subdomain
    pub collapsed_roots: Vec<String>,
}

/// Bucket domains by root domain.
///
/// Domains with no extractable root are returned separately, untouched.
pub fn group_by_root<S: AsRef<str>>(
    domains: &[S],
    table: &TldTable,
) -> (DomainGroups, Vec<String>) {
    let mut groups = DomainGroups::new();
    let mut unprocessable = Vec::new();

    for domain in domains {
        let domain = domain.as_ref();
        match table.extract(domain) {
            Some(extracted) => {
                groups
                    .entry(extracted.root_domain)
                    .or_default()
                    .insert(domain.to_string());
            }
            None => unprocessable.push(domain.to_string()),
        }
    }

    (groups, unprocessable)
}

/// Group `domains` by root and apply `policy`.
///
/// Idempotent: a collapsed root has no listed subdomains left, so running
/// again over the output changes nothing.
pub fn collapse<S: AsRef<str>>(
    domains: &[S],
    table: &TldTable,
    policy: &CollapsePolicy,
) -> Collapsed {
    let (groups, unprocessable) = group_by_root(domains, table);
    let mut out = Collapsed::default();

    for (root, members) in groups {
        match policy.decide(&root, &members) {
            GroupAction::Keep => out.exact.extend(members),
            GroupAction::Collapse => {
                tracing::debug!(
                    root = %root,
                    replaced = members.len() - usize::from(members.contains(&root)),
                    "collapsing group"
                );
                if policy.split_mode {
                    out.wildcard.push(root.clone());
                } else {
                    out.exact.push(root.clone());
                }
                out.collapsed_roots.push(root);
            }
        }
    }

    for domain in &unprocessable {
        tracing::warn!(domain = %domain, "no extractable root, keeping verbatim");
    }
    out.exact.extend(unprocessable.iter().cloned());
    out.unprocessable = unprocessable;

    sort_dedup(&mut out.exact);
    sort_dedup(&mut out.wildcard);
    out
}

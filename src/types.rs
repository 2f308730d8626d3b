use serde::{Deserialize, Serialize};

/// Result of splitting a domain into its TLD, second-level label and root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractedDomain {
    /// Matched TLD without leading dot (may span several labels, e.g. "co.uk")
    pub tld: String,
    /// Label immediately left of the TLD
    pub sld: String,
    /// `sld.tld`, always a label-aligned suffix of the source domain
    pub root_domain: String,
}

impl ExtractedDomain {
    pub(crate) fn new(tld: &str, sld: &str) -> Self {
        Self {
            tld: tld.to_string(),
            sld: sld.to_string(),
            root_domain: format!("{}.{}", sld, tld),
        }
    }
}

/// The two persisted output collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSets {
    /// Entries matched by equality only
    pub exact: Vec<String>,
    /// Entries matching themselves and every subdomain
    #[serde(default)]
    pub wildcard: Vec<String>,
}

impl DomainSets {
    pub fn new(exact: Vec<String>, wildcard: Vec<String>) -> Self {
        Self { exact, wildcard }
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.wildcard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wildcard.is_empty()
    }
}

/// Raw material for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineInput {
    /// Newly contributed candidates, unnormalized
    pub contributions: Vec<String>,
    /// Exact set produced by the previous run
    pub exact: Vec<String>,
    /// Wildcard set produced by the previous run
    pub wildcard: Vec<String>,
}

impl PipelineInput {
    pub fn new(contributions: Vec<String>) -> Self {
        Self {
            contributions,
            ..Default::default()
        }
    }

    /// Seed the run with the previous run's output
    pub fn with_existing(mut self, sets: DomainSets) -> Self {
        self.exact = sets.exact;
        self.wildcard = sets.wildcard;
        self
    }

    /// Build input from contribution text, one entry per line.
    /// Blank lines and `#` comments are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(crate::store::parse_contributions(text))
    }
}

/// Non-fatal findings accumulated over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Entries after normalization, before collapsing
    pub input_count: usize,
    /// Domains without an extractable root, passed through verbatim
    pub unprocessable: Vec<String>,
    /// Roots that replaced their subdomains
    pub collapsed_roots: Vec<String>,
    /// Exact entries dropped because a wildcard already covers them
    pub covered: Vec<String>,
    /// Entries removed for failing FQDN validation
    pub invalid: Vec<String>,
}

impl Report {
    /// True when the run produced no diagnostics worth surfacing
    pub fn is_clean(&self) -> bool {
        self.unprocessable.is_empty() && self.invalid.is_empty()
    }
}

/// Output of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub sets: DomainSets,
    pub report: Report,
}

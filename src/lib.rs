//! Disposable Domains - curation engine for disposable email domain lists
//!
//! This library turns raw contributed domain names into a curated list with:
//! - Normalization (lowercase, trimmed, sorted, deduplicated)
//! - Root extraction by longest-suffix match against a TLD table
//! - Collapsing of sibling subdomains into their root
//! - Wildcard coverage reduction with label-boundary-safe suffix checks
//! - FQDN validation with a non-fatal report
//!
//! # Example
//!
//! ```rust
//! use disposable_domains::{DisposableMatcher, Pipeline, PipelineConfig, PipelineInput};
//!
//! let contributions = "
//! a.mailinator.com
//! b.mailinator.com
//! yopmail.com
//! not a domain
//! ";
//!
//! // Split mode: collapsed roots go to the wildcard set
//! let pipeline = Pipeline::new(PipelineConfig::new()).unwrap();
//! let output = pipeline.run(PipelineInput::from_lines(contributions));
//!
//! assert_eq!(output.sets.exact, vec!["yopmail.com"]);
//! assert_eq!(output.sets.wildcard, vec!["mailinator.com"]);
//! assert_eq!(output.report.invalid, vec!["not a domain"]);
//!
//! // Consumers match against both lists
//! let matcher = DisposableMatcher::from_sets(&output.sets);
//! assert!(matcher.is_disposable("someone@x.mailinator.com"));
//! assert!(!matcher.is_disposable("evilmailinator.com"));
//! ```
//!
//! # Collapse policy
//!
//! | Mode | Threshold | Collapsed root goes to |
//! |------|-----------|------------------------|
//! | Single list | 3 | exact set |
//! | Split (default) | 2 | wildcard set |
//!
//! A group whose root is listed explicitly always collapses to the root.
//!
//! # Matching contract
//!
//! A candidate is disposable iff it equals an exact entry, equals a wildcard
//! entry, or is a dot-delimited subdomain of a wildcard entry.

pub mod collapse;
pub mod config;
pub mod coverage;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod pipeline;
pub mod store;
pub mod tld;
pub mod types;
pub mod validator;

// Re-export commonly used items
pub use collapse::{collapse, group_by_root, CollapsePolicy, Collapsed, DomainGroups};
pub use config::{PipelineConfig, TldSource};
pub use coverage::{is_covered, reduce};
pub use error::{DomainListError, Result};
pub use matcher::{DisposableMatcher, DomainMatcher, MatchKind, WildcardIndex};
pub use normalizer::{normalize, normalize_wildcard};
pub use pipeline::Pipeline;
pub use store::StorePaths;
pub use tld::TldTable;
pub use types::{DomainSets, ExtractedDomain, PipelineInput, PipelineOutput, Report};
pub use validator::{is_valid_fqdn, validate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let contributions = r#"
# New contributions
sub1.tempbox.com
sub2.tempbox.com
Sub3.TempBox.com
throwaway.net
a.throwaway.net
mail.guerrilla.co.uk
x.mailinator.com
evilmailinator.com
not a domain
noTLD
"#;

        let existing = DomainSets::new(
            vec!["oldlist.org".to_string()],
            vec!["mailinator.com".to_string()],
        );

        // Split mode over the built-in table
        let pipeline = Pipeline::new(PipelineConfig::new()).unwrap();
        let input = PipelineInput::from_lines(contributions).with_existing(existing);
        let output = pipeline.run(input);

        // Three siblings collapse, explicit root wins
        assert_eq!(
            output.sets.wildcard,
            vec!["mailinator.com", "tempbox.com", "throwaway.net"]
        );

        // Covered entry dropped, boundary-adjacent one kept
        assert_eq!(
            output.sets.exact,
            vec!["evilmailinator.com", "mail.guerrilla.co.uk", "oldlist.org"]
        );
        assert_eq!(output.report.covered, vec!["x.mailinator.com"]);

        // Bad entries are reported, not fatal
        assert_eq!(output.report.invalid, vec!["not a domain", "notld"]);
        assert_eq!(output.report.unprocessable, vec!["not a domain", "notld"]);

        // Consumer view
        let matcher = DisposableMatcher::from_sets(&output.sets);
        assert!(matcher.is_disposable("user@sub9.tempbox.com"));
        assert!(matcher.is_disposable("throwaway.net"));
        assert!(matcher.is_disposable("mail.guerrilla.co.uk"));
        assert!(!matcher.is_disposable("other.guerrilla.co.uk"));
        assert!(!matcher.is_disposable("evil.oldlist.org"));

        // Second run over its own output changes nothing
        let again = pipeline.run(PipelineInput::default().with_existing(output.sets.clone()));
        assert_eq!(again.sets, output.sets);
        assert!(again.report.collapsed_roots.is_empty());
    }
}

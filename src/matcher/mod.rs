mod disposable;
mod wildcard;

pub use disposable::{DisposableMatcher, MatchKind};
pub use wildcard::WildcardIndex;

/// Trait for domain matchers
pub trait DomainMatcher {
    /// Check if the domain matches this matcher.
    /// Assumes `domain` is already lowercased.
    fn matches(&self, domain: &str) -> bool;
}

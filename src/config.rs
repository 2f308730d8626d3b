use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collapse::CollapsePolicy;
use crate::error::{DomainListError, Result};
use crate::tld::TldTable;

/// Where the TLD table comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum TldSource {
    /// Table bundled with the crate
    #[default]
    Builtin,
    /// Table file in public-suffix-list syntax
    File(PathBuf),
    /// Explicit list of suffixes
    Inline(Vec<String>),
}

impl TldSource {
    /// Resolve the source into a table. File errors and malformed inline
    /// suffixes are fatal.
    pub fn load(&self) -> Result<Cow<'static, TldTable>> {
        match self {
            TldSource::Builtin => Ok(Cow::Borrowed(TldTable::builtin())),
            TldSource::File(path) => Ok(Cow::Owned(TldTable::from_file(path)?)),
            TldSource::Inline(tlds) => Ok(Cow::Owned(TldTable::try_new(tlds)?)),
        }
    }
}

/// Pipeline configuration.
///
/// Defaults to split mode (exact + wildcard lists, threshold 2) over the
/// built-in TLD table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Collapse threshold and split mode
    #[serde(flatten)]
    pub policy: CollapsePolicy,
    /// TLD table source
    pub tld_source: TldSource,
}

impl PipelineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// One output list with threshold 3.
    pub fn single_list() -> Self {
        Self {
            policy: CollapsePolicy::single_list(),
            ..Self::default()
        }
    }

    /// Set collapse threshold.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.policy.threshold = threshold;
        self
    }

    /// Enable or disable the wildcard set.
    pub fn with_split_mode(mut self, split_mode: bool) -> Self {
        self.policy.split_mode = split_mode;
        self
    }

    /// Set TLD table source.
    pub fn with_tld_source(mut self, source: TldSource) -> Self {
        self.tld_source = source;
        self
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DomainListError::load(path, e))?;
        Self::from_json(&text).map_err(|e| DomainListError::load(path, e))
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.policy.threshold == 0 {
            return Err(DomainListError::Config(
                "collapse threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_split_mode() {
        let config = PipelineConfig::new();
        assert!(config.policy.split_mode);
        assert_eq!(config.policy.threshold, 2);
        assert_eq!(config.tld_source, TldSource::Builtin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_list_preset() {
        let config = PipelineConfig::single_list();
        assert!(!config.policy.split_mode);
        assert_eq!(config.policy.threshold, 3);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_threshold(5)
            .with_split_mode(false)
            .with_tld_source(TldSource::Inline(vec!["com".into()]));
        assert_eq!(config.policy.threshold, 5);
        assert!(!config.policy.split_mode);
        assert_eq!(config.tld_source.load().unwrap().len(), 1);
    }

    #[test]
    fn test_from_json() {
        let config = PipelineConfig::from_json(
            r#"{"threshold": 4, "split_mode": false, "tld_source": {"kind": "inline", "value": ["com", "co.uk"]}}"#,
        )
        .unwrap();
        assert_eq!(config.policy.threshold, 4);
        assert!(!config.policy.split_mode);
        assert_eq!(
            config.tld_source,
            TldSource::Inline(vec!["com".into(), "co.uk".into()])
        );
    }

    #[test]
    fn test_from_json_defaults() {
        let config = PipelineConfig::from_json("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = PipelineConfig::from_json(r#"{"threshold": 0}"#);
        assert!(matches!(result, Err(DomainListError::Config(_))));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let result = PipelineConfig::from_json("{not json");
        assert!(matches!(result, Err(DomainListError::Json(_))));
    }

    #[test]
    fn test_malformed_inline_tld_rejected() {
        let source = TldSource::Inline(vec!["com".into(), "co..uk".into()]);
        assert!(matches!(
            source.load(),
            Err(DomainListError::TldTable { line: 2, .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"threshold": 4, "split_mode": false}"#).unwrap();

        let config = PipelineConfig::from_file(&path).unwrap();
        assert_eq!(config.policy.threshold, 4);
        assert!(!config.policy.split_mode);
        assert_eq!(config.tld_source, TldSource::Builtin);
    }

    #[test]
    fn test_missing_tld_file_is_fatal() {
        let source = TldSource::File(PathBuf::from("/nonexistent/tlds.dat"));
        assert!(source.load().is_err());
    }
}

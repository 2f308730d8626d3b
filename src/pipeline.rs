//! Pipeline entry point.
//!
//! Runs the stages strictly in order, each consuming the previous stage's
//! output: normalize, collapse, reduce coverage (split mode), validate.

use std::borrow::Cow;

use crate::collapse::collapse;
use crate::config::PipelineConfig;
use crate::coverage::reduce;
use crate::error::Result;
use crate::normalizer::{normalize, normalize_wildcard, sort_dedup};
use crate::store::{self, StorePaths};
use crate::tld::TldTable;
use crate::types::{DomainSets, PipelineInput, PipelineOutput, Report};
use crate::validator::validate;

/// Configured list-processing pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    table: Cow<'static, TldTable>,
}

impl Pipeline {
    /// Validate `config` and load its TLD table.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let table = config.tld_source.load()?;
        Ok(Self { config, table })
    }

    /// Use an already-built TLD table, ignoring `config.tld_source`.
    pub fn with_table(config: PipelineConfig, table: TldTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            table: Cow::Owned(table),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn table(&self) -> &TldTable {
        &self.table
    }

    /// Process one batch. Never fails: bad entries end up in the report.
    pub fn run(&self, input: PipelineInput) -> PipelineOutput {
        let policy = &self.config.policy;
        let mut report = Report::default();

        let candidates = normalize(input.contributions.iter().chain(input.exact.iter()));
        let existing_wildcard = normalize_wildcard(&input.wildcard);
        report.input_count = candidates.len();
        tracing::debug!(
            candidates = candidates.len(),
            wildcard = existing_wildcard.len(),
            "normalized input"
        );

        let collapsed = collapse(&candidates, &self.table, policy);
        report.unprocessable = collapsed.unprocessable;
        report.collapsed_roots = collapsed.collapsed_roots;

        let mut wildcard = existing_wildcard;
        wildcard.extend(collapsed.wildcard);
        sort_dedup(&mut wildcard);
        tracing::debug!(
            exact = collapsed.exact.len(),
            wildcard = wildcard.len(),
            collapsed = report.collapsed_roots.len(),
            "collapsed groups"
        );

        let exact = if policy.split_mode {
            let reduced = reduce(&collapsed.exact, &wildcard);
            tracing::debug!(
                remaining = reduced.exact.len(),
                covered = reduced.covered.len(),
                "reduced wildcard coverage"
            );
            report.covered = reduced.covered;
            reduced.exact
        } else {
            collapsed.exact
        };

        let exact = validate(&exact);
        let wildcard = validate(&wildcard);
        report.invalid = exact.invalid;
        report.invalid.extend(wildcard.invalid);

        let sets = DomainSets::new(exact.valid, wildcard.valid);
        tracing::info!(
            input = report.input_count,
            exact = sets.exact.len(),
            wildcard = sets.wildcard.len(),
            collapsed = report.collapsed_roots.len(),
            covered = report.covered.len(),
            unprocessable = report.unprocessable.len(),
            invalid = report.invalid.len(),
            "domain list processed"
        );

        PipelineOutput { sets, report }
    }

    /// Load, process and persist the lists at `paths`.
    ///
    /// Every load happens before anything is written; a load failure aborts
    /// the run with the files untouched. The contribution file is cleared
    /// only after the lists are saved.
    pub fn run_files(&self, paths: &StorePaths) -> Result<PipelineOutput> {
        let contributions = store::read_contributions(&paths.contributions)?;
        let exact = store::load_list(&paths.exact)?;
        let wildcard = if self.config.policy.split_mode {
            store::load_list(&paths.wildcard)?
        } else {
            Vec::new()
        };

        let output = self.run(PipelineInput {
            contributions,
            exact,
            wildcard,
        });

        store::save_list(&paths.exact, &output.sets.exact)?;
        if self.config.policy.split_mode {
            store::save_list(&paths.wildcard, &output.sets.wildcard)?;
        }
        store::clear_contributions(&paths.contributions)?;

        Ok(output)
    }
}

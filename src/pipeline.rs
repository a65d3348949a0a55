use crate::config::{AnalysisOpts, ConfigError};
use crate::diagnostics::DiagnosticSink;
use crate::loader::{self, LoadError};
use crate::parser;
use crate::patterns::{PatternError, PatternSet};
use crate::report::{self, AnalysisStats, Report};
use crate::{sequence, temporal};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// A validated, ready-to-run analysis: compiled patterns plus options.
#[derive(Debug, Clone)]
pub struct Pipeline {
    patterns: PatternSet,
    opts: AnalysisOpts,
}

impl Pipeline {
    pub fn new<I, S>(patterns: I, opts: AnalysisOpts) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        opts.validate()?;
        let patterns = PatternSet::new(patterns)?;
        tracing::debug!(
            patterns = patterns.len(),
            bucket_seconds = opts.bucket_seconds,
            top = opts.top,
            "pipeline ready"
        );
        Ok(Self { patterns, opts })
    }

    /// Loads `path` and analyzes it. `Ok(None)` means the document was not valid JSON.
    pub fn run_file(
        &self,
        path: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<Report>, LoadError> {
        let Some(document) = loader::load_document(path, sink)? else {
            return Ok(None);
        };
        Ok(Some(self.analyze(&document, sink)))
    }

    pub fn analyze(&self, document: &Value, sink: &mut dyn DiagnosticSink) -> Report {
        let comments = parser::comments(document);
        let messages = parser::extract_messages(comments);
        let bucketed = temporal::count_patterns_per_bucket(
            &messages,
            &self.patterns,
            self.opts.bucket_width(),
            sink,
        );
        let window = bucketed
            .counts
            .keys()
            .min()
            .copied()
            .zip(bucketed.counts.keys().max().copied());
        let stats = AnalysisStats {
            comments: comments.len(),
            messages: messages.len(),
            counted: bucketed.counted,
            skipped_timestamps: bucketed.skipped,
            total_matches: bucketed.total_matches(),
        };
        let (sequential, total_intervals) = sequence::to_sequential(&bucketed.counts);
        Report {
            top: report::rank(&sequential, self.opts.top),
            total_intervals,
            bucket_seconds: u64::from(self.opts.bucket_seconds),
            window,
            stats,
        }
    }
}

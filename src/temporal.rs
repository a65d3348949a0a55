use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::parser::Message;
use crate::patterns::PatternSet;
use chrono::{DateTime, Duration, FixedOffset, Timelike};
use std::collections::HashMap;

/// Pattern hits per bucket start. Unordered; see [`crate::sequence`] for ordering.
pub type BucketCounts = HashMap<DateTime<FixedOffset>, usize, ahash::RandomState>;

#[derive(Debug, Clone, Default)]
pub struct Bucketed {
    pub counts: BucketCounts,
    pub counted: usize, // messages that landed in a bucket
    pub skipped: usize, // messages dropped for a bad timestamp
}

impl Bucketed {
    pub fn total_matches(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Floors `t` to the start of its bucket in local wall-clock time.
///
/// Buckets are aligned to local midnight, so any width dividing a minute
/// simply rounds the seconds field down. Widths are expected to divide a
/// day (see [`crate::config::AnalysisOpts::validate`]). The offset is left
/// untouched.
pub fn floor_to_bucket(t: DateTime<FixedOffset>, bucket: Duration) -> DateTime<FixedOffset> {
    let secs = bucket.num_seconds();
    if secs <= 0 { return t; }
    let whole = t.with_nanosecond(0).unwrap_or(t);
    let into_day = i64::from(whole.num_seconds_from_midnight());
    whole - Duration::seconds(into_day.rem_euclid(secs))
}

pub fn count_patterns_per_bucket(
    messages: &[Message],
    patterns: &PatternSet,
    bucket: Duration,
    sink: &mut dyn DiagnosticSink,
) -> Bucketed {
    let mut out = Bucketed::default();
    for msg in messages {
        let t = match msg.parse_timestamp() {
            Ok(t) => t,
            Err(e) => {
                sink.report(Diagnostic::TimestampParse {
                    raw: msg.timestamp.as_ref().map(|r| r.as_str().to_string()),
                    reason: e.to_string(),
                });
                out.skipped += 1;
                continue;
            }
        };
        let b = floor_to_bucket(t, bucket);
        // a message without hits still marks its bucket as observed
        *out.counts.entry(b).or_insert(0) += patterns.count_matches(&msg.body);
        out.counted += 1;
    }
    tracing::debug!(
        buckets = out.counts.len(),
        counted = out.counted,
        skipped = out.skipped,
        "bucketed messages"
    );
    out
}

use crate::sequence::SequentialCounts;
use chrono::{DateTime, FixedOffset};
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub index: usize,
    pub count: usize,
}

/// Densest buckets first; equal counts keep chronological order.
pub fn rank(sequential: &SequentialCounts, top: usize) -> Vec<RankedEntry> {
    sequential
        .iter()
        .map(|(&index, &count)| RankedEntry { index, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.index.cmp(&b.index)))
        .take(top)
        .collect()
}

/// `H:MM:SS`, hours unpadded and not wrapped at 24.
pub fn format_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let rem = seconds % 3600;
    format!("{}:{:02}:{:02}", hours, rem / 60, rem % 60)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisStats {
    pub comments: usize,
    pub messages: usize,
    pub counted: usize,
    pub skipped_timestamps: usize,
    pub total_matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub top: Vec<RankedEntry>,
    pub total_intervals: usize,
    pub bucket_seconds: u64,
    /// First and last bucket start, absolute.
    pub window: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>,
    pub stats: AnalysisStats,
}

impl Report {
    pub fn offset_seconds(&self, index: usize) -> u64 {
        index as u64 * self.bucket_seconds
    }

    /// Offset of the last observed bucket; 0 when nothing was observed.
    pub fn final_offset_seconds(&self) -> u64 {
        self.offset_seconds(self.total_intervals.saturating_sub(1))
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .top
            .iter()
            .map(|e| format!("Time {}: {}", format_seconds(self.offset_seconds(e.index)), e.count))
            .collect();
        out.push(format!("Final timestamp: {}", format_seconds(self.final_offset_seconds())));
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

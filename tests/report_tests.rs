use emotescope::report::{format_seconds, rank, AnalysisStats, RankedEntry, Report};
use emotescope::sequence::SequentialCounts;

fn report(top: Vec<RankedEntry>, total_intervals: usize) -> Report {
    Report { top, total_intervals, bucket_seconds: 15, window: None, stats: AnalysisStats::default() }
}

#[test]
fn format_seconds_examples() {
    assert_eq!(format_seconds(0), "0:00:00");
    assert_eq!(format_seconds(15), "0:00:15");
    assert_eq!(format_seconds(3661), "1:01:01");
    assert_eq!(format_seconds(59 * 60 + 45), "0:59:45");
    // hours are not wrapped at a day
    assert_eq!(format_seconds(100 * 3600 + 5), "100:00:05");
}

#[test]
fn format_seconds_composes_fields() {
    for h in [0u64, 1, 9, 10, 23, 24, 250] {
        for m in [0u64, 1, 9, 30, 59] {
            for s in [0u64, 7, 15, 59] {
                assert_eq!(format_seconds(h * 3600 + m * 60 + s), format!("{h}:{m:02}:{s:02}"));
            }
        }
    }
}

#[test]
fn ranks_by_count_descending_and_truncates() {
    let seq: SequentialCounts = (0..20).map(|i| (i, (i * 7) % 11)).collect();
    let ranked = rank(&seq, 8);
    assert_eq!(ranked.len(), 8);
    assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(ranked[0].count, 10);
}

#[test]
fn ties_keep_chronological_order() {
    let seq: SequentialCounts = [(0, 1), (1, 5), (2, 5), (3, 2), (4, 5)].into_iter().collect();
    let ranked = rank(&seq, 3);
    let indices: Vec<usize> = ranked.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![1, 2, 4]);
}

#[test]
fn fewer_buckets_than_top_returns_all() {
    let seq: SequentialCounts = [(0, 2), (1, 1)].into_iter().collect();
    assert_eq!(rank(&seq, 8).len(), 2);
    assert!(rank(&seq, 0).is_empty());
}

#[test]
fn renders_time_lines_then_final_timestamp() {
    let r = report(
        vec![RankedEntry { index: 240, count: 9 }, RankedEntry { index: 1, count: 3 }],
        241,
    );
    assert_eq!(
        r.lines(),
        vec![
            "Time 1:00:00: 9".to_string(),
            "Time 0:00:15: 3".to_string(),
            "Final timestamp: 1:00:00".to_string(),
        ]
    );
    assert_eq!(r.to_string(), "Time 1:00:00: 9\nTime 0:00:15: 3\nFinal timestamp: 1:00:00\n");
}

#[test]
fn empty_report_still_prints_final_line() {
    let r = report(vec![], 0);
    assert_eq!(r.final_offset_seconds(), 0);
    assert_eq!(r.lines(), vec!["Final timestamp: 0:00:00".to_string()]);
}

#[test]
fn offsets_follow_bucket_width() {
    let mut r = report(vec![RankedEntry { index: 3, count: 1 }], 5);
    r.bucket_seconds = 60;
    assert_eq!(r.offset_seconds(3), 180);
    assert_eq!(r.lines()[0], "Time 0:03:00: 1");
    assert_eq!(r.lines()[1], "Final timestamp: 0:04:00");
}

use emotescope::config::AnalysisOpts;
use emotescope::diagnostics::Diagnostic;
use emotescope::loader::parse_document;
use emotescope::pipeline::Pipeline;
use serde_json::json;

fn pipeline() -> Pipeline {
    Pipeline::new([r"\bLUL\b", r"\bKEKW\b"], AnalysisOpts::default()).unwrap()
}

#[test]
fn malformed_entries_are_skipped_valid_ones_counted() {
    let doc = json!({
        "comments": [
            "bare string",
            null,
            {"created_at": "2024-01-01T00:00:05Z", "message": {"body": "LUL"}},
            17,
            {"created_at": "2024-01-01T00:00:35Z", "message": {"body": "KEKW KEKW"}},
        ]
    });
    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = pipeline().analyze(&doc, &mut diags);
    assert!(diags.is_empty(), "shape mismatches are silent: {diags:?}");
    assert_eq!(report.stats.comments, 5);
    assert_eq!(report.stats.messages, 2);
    assert_eq!(report.to_string(), "Time 0:00:15: 2\nTime 0:00:00: 1\nFinal timestamp: 0:00:15\n");
}

#[test]
fn unparseable_timestamp_is_excluded_and_run_continues() {
    let doc = json!({
        "comments": [
            {"created_at": "not-a-date", "message": {"body": "LUL LUL LUL LUL"}},
            {"message": {"body": "LUL"}},
            {"created_at": "2024-01-01T00:00:05Z", "message": {"body": "LUL"}},
        ]
    });
    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = pipeline().analyze(&doc, &mut diags);
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.kind() == "bad_timestamp"));
    assert_eq!(report.stats.skipped_timestamps, 2);
    assert_eq!(report.stats.total_matches, 1);
    assert_eq!(report.to_string(), "Time 0:00:00: 1\nFinal timestamp: 0:00:00\n");
}

#[test]
fn numeric_created_at_is_reported_and_not_counted() {
    let doc = json!({
        "comments": [
            {"created_at": 1704067205, "message": {"body": "LUL"}},
            {"created_at": "2024-01-01T00:00:20Z", "message": {"body": "KEKW"}},
        ]
    });
    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = pipeline().analyze(&doc, &mut diags);
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].to_string(),
        "Error parsing timestamp 1704067205: timestamp is not a string: 1704067205"
    );
    assert_eq!(report.stats.skipped_timestamps, 1);
    assert_eq!(report.to_string(), "Time 0:00:00: 1\nFinal timestamp: 0:00:00\n");
}

#[test]
fn nothing_usable_yields_only_final_line() {
    let doc = json!({"comments": [{"created_at": "garbage", "message": {"body": "LUL"}}]});
    let mut diags: Vec<Diagnostic> = Vec::new();
    let report = pipeline().analyze(&doc, &mut diags);
    assert_eq!(report.total_intervals, 0);
    assert!(report.window.is_none());
    assert_eq!(report.to_string(), "Final timestamp: 0:00:00\n");
}

#[test]
fn document_without_comments_is_empty_not_an_error() {
    let mut diags: Vec<Diagnostic> = Vec::new();
    let doc = parse_document(r#"{"video": {"id": "1"}}"#, "memory", &mut diags).unwrap();
    let report = pipeline().analyze(&doc, &mut diags);
    assert!(diags.is_empty());
    assert_eq!(report.stats.comments, 0);
    assert!(report.top.is_empty());
}

//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use shadescope::models::AnalysisReport;

/// Assert the photo passed the focus gate and carries a shade reading
pub fn assert_in_focus(report: &AnalysisReport) {
    assert!(
        report.quality_passed,
        "Expected image to pass focus gate, got verdict {} (variance {})",
        report.sharpness.verdict, report.sharpness.laplacian_variance
    );
    assert!(report.shade.is_some(), "Expected a shade reading");
}

/// Assert the photo was rejected as blurry and no shade was interpreted
pub fn assert_rejected(report: &AnalysisReport) {
    assert_eq!(report.sharpness.verdict, "rejected");
    assert!(!report.quality_passed);
    assert!(
        report.shade.is_none(),
        "Rejected image should not carry a shade reading"
    );
}

/// Assert a JSON object has exactly the given keys
pub fn assert_keys(value: &serde_json::Value, expected: &[&str]) {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("Expected JSON object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);
}

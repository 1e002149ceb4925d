use sumscan_core::{scan, ErrorInfo, ScanError, ScanInput, ScanOutcome};

#[test]
fn outcome_survives_json_roundtrip() {
    let input = ScanInput::new(vec![1, 2, 3], 4).unwrap();
    let outcome = scan(&input);

    let json = serde_json::to_string(&outcome).unwrap();
    let restored: ScanOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(outcome, restored);
}

#[test]
fn error_survives_json_roundtrip() {
    let err = ScanError::Values(
        ErrorInfo::new("sumscan.values_token", "A[1] = \"a\" is invalid.")
            .with_context("position", "1")
            .with_context("token", "a")
            .with_hint("use only positive integers"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let restored: ScanError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}

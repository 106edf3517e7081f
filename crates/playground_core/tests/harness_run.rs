use binary_playground_core::{
    parse_operation, run, BackendKind, HarnessError, NumericRecord, Operation, OperationResult,
    RunConfig,
};

#[test]
fn scalar_run_uses_configured_inputs() {
    let config = RunConfig {
        scalars: [1.25, 2.5, -0.75],
        ..RunConfig::new(Operation::Scalar)
    };
    let outcome = run(&config).expect("built-in run should succeed");

    assert_eq!(outcome.backend, BackendKind::Local);
    assert!(outcome.module_path.is_none());
    assert_eq!(
        outcome.result,
        OperationResult::Scalar {
            inputs: [1.25, 2.5, -0.75],
            sum: 3.0,
        }
    );
}

#[test]
fn vector_run_uses_canned_buffers() {
    let outcome = run(&RunConfig::new(Operation::Vector)).expect("vector run");
    let OperationResult::Vector { sum, .. } = outcome.result else {
        panic!("expected vector result, got {:?}", outcome.result);
    };
    let expected = [1.6_f32, 2.7, 3.8];
    assert_eq!(sum.len(), expected.len());
    for (got, want) in sum.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
    }
}

#[test]
fn struct_run_uses_canned_records() {
    let outcome = run(&RunConfig::new(Operation::Struct)).expect("struct run");
    let OperationResult::Struct { sum, .. } = outcome.result else {
        panic!("expected struct result, got {:?}", outcome.result);
    };
    assert_eq!(sum, NumericRecord::new(5, 4.0, 4.0));
}

#[test]
fn preferring_a_missing_module_fails_with_module_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = RunConfig {
        prefer_module: true,
        module_dir: dir.path().to_path_buf(),
        ..RunConfig::new(Operation::Scalar)
    };

    let err = run(&config).expect_err("no module in an empty directory");
    assert!(matches!(err, HarnessError::ModuleNotFound(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn unknown_operation_is_reported_with_its_own_exit_code() {
    let err = parse_operation("matrix").expect_err("matrix is not an operation");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn outcome_serializes_with_tagged_result() {
    let outcome = run(&RunConfig::new(Operation::Struct)).expect("struct run");
    let json = serde_json::to_value(&outcome).expect("outcome should serialize");
    assert_eq!(json["operation"], "struct");
    assert_eq!(json["backend"], "local");
    assert_eq!(json["result"]["kind"], "struct");
    assert_eq!(json["result"]["sum"]["x"], 5);
}

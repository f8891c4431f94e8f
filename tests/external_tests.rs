#![cfg(unix)]

use std::time::Duration;

use samsalvage::external::{TestdiskOutcome, run_bounded};

#[test]
fn test_run_bounded_captures_stdout() {
    let outcome = run_bounded("sh", ["-c", "echo salvage"], Duration::from_secs(10)).unwrap();
    match outcome {
        TestdiskOutcome::Completed { stdout } => assert_eq!(stdout.trim(), "salvage"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_run_bounded_missing_tool() {
    let outcome = run_bounded(
        "samsalvage-no-such-tool",
        ["--help"],
        Duration::from_secs(1),
    )
    .unwrap();
    assert!(matches!(outcome, TestdiskOutcome::ToolMissing));
}

#[test]
fn test_run_bounded_kills_on_timeout() {
    let outcome = run_bounded("sh", ["-c", "sleep 5"], Duration::from_millis(300)).unwrap();
    assert!(matches!(outcome, TestdiskOutcome::TimedOut { .. }));
}

//! End-to-end tests for the exhaustive interleaving sweep.
mod common;
use common::*;
use kousa::prelude::*;

#[test]
fn test_single_thread_sweep() {
    let harness = TestHarness::builder().build();
    let test = TestCase {
        inputs: vec![],
        expected_outputs: vec![5],
    };
    let report = harness
        .run(&constant_write_program(), &test, &CancelToken::new())
        .expect("Failed to run");

    assert!(!report.cancelled);
    assert_eq!(report.total_paths_tested, 1);
    assert_eq!(report.successful_paths, 1);

    // At k=1 only the assignment runs, so the write is missing.
    assert_eq!(report.success_percentage_by_operation_limit[&1], 0.0);
    for k in 2..=MAX_OPERATION_LIMIT {
        assert_eq!(report.success_percentage_by_operation_limit[&k], 100.0);
    }
}

#[test]
fn test_two_thread_sweep_tallies_every_schedule() {
    let harness = TestHarness::builder().build();
    // Outputs are [3, 4] only when one thread runs to completion before the
    // other starts: 2 of the 6 interleavings.
    let test = TestCase {
        inputs: vec![3, 4],
        expected_outputs: vec![3, 4],
    };
    let report = harness
        .run(&read_write_pair_program(), &test, &CancelToken::new())
        .expect("Failed to run");

    assert_eq!(report.total_paths_tested, 6);
    assert_eq!(report.successful_paths, 2);
    assert_eq!(
        report.success_percentage_by_operation_limit.len(),
        MAX_OPERATION_LIMIT
    );
    // Four useful steps are needed for any output to be complete.
    assert_eq!(report.success_percentage_by_operation_limit[&3], 0.0);
    assert_eq!(
        report.success_percentage_by_operation_limit[&MAX_OPERATION_LIMIT],
        33.33
    );
}

#[test]
fn test_cancelled_before_first_schedule() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let harness = TestHarness::builder().build();
    let report = harness
        .run(
            &constant_write_program(),
            &TestCase::default(),
            &cancel,
        )
        .expect("Failed to run");

    assert!(report.cancelled);
    assert_eq!(report.total_paths_tested, 0);
    assert_eq!(report.successful_paths, 0);
    for k in 1..=MAX_OPERATION_LIMIT {
        assert_eq!(report.success_percentage_by_operation_limit[&k], 0.0);
    }
}

#[test]
fn test_per_schedule_monotonicity() {
    // With a full-length expected trace, a schedule that mismatches at the
    // highest budget cannot match at any lower one.
    let program = read_write_pair_program();
    let simulator = Simulator::new(&program);
    let expected = vec![3, 4];

    for schedule in ScheduleGenerator::new(&program) {
        let final_verdict =
            simulator.replay(&schedule, MAX_OPERATION_LIMIT, &[3, 4]) == expected;
        if !final_verdict {
            for k in 1..MAX_OPERATION_LIMIT {
                assert_ne!(simulator.replay(&schedule, k, &[3, 4]), expected);
            }
        }
    }
}

#[test]
fn test_report_uses_the_wire_casing() {
    let harness = TestHarness::builder().build();
    let report = harness
        .run(
            &constant_write_program(),
            &TestCase::default(),
            &CancelToken::new(),
        )
        .expect("Failed to run");

    let value = serde_json::to_value(&report).expect("Failed to serialize");
    assert!(value.get("cancelled").is_some());
    assert!(value.get("totalPathsTested").is_some());
    assert!(value.get("successfulPaths").is_some());
    assert!(value.get("successPercentageByOperationLimit").is_some());
}

#[test]
fn test_validation_runs_before_any_simulation() {
    let harness = TestHarness::builder().build();
    let result = harness.run(
        &Program::default(),
        &TestCase::default(),
        &CancelToken::new(),
    );
    assert_eq!(result, Err(ValidationError::EmptyProgram));

    let limits = Limits {
        max_threads: 1,
        ..Limits::default()
    };
    let strict = TestHarness::builder().with_limits(limits).build();
    let result = strict.run(
        &read_write_pair_program(),
        &TestCase::default(),
        &CancelToken::new(),
    );
    assert_eq!(result, Err(ValidationError::TooManyThreads { max: 1 }));
}

#[test]
fn test_cancellation_mid_sweep_returns_partial_tallies() {
    // Three pair-threads: 6!/(2!*2!*2!) = 90 schedules. Cancel from within
    // the sweep by flipping the token once a few schedules have been tallied.
    let thread = |prefix: &str| {
        diagram(
            vec![
                block(
                    &format!("{prefix}-read"),
                    BlockKind::Read,
                    &[("variable", "v")],
                ),
                block(
                    &format!("{prefix}-write"),
                    BlockKind::Write,
                    &[("variable", "v")],
                ),
            ],
            vec![connection(
                &format!("{prefix}-c"),
                &format!("{prefix}-read"),
                &format!("{prefix}-write"),
                ConnectionKind::Normal,
            )],
        )
    };
    let program = Program::new(vec![thread("a"), thread("b"), thread("c")]);

    let cancel = CancelToken::new();
    let flipper = cancel.clone();
    let handle = std::thread::spawn(move || {
        flipper.cancel();
    });

    let harness = TestHarness::builder().build();
    let report = harness
        .run(&program, &TestCase::default(), &cancel)
        .expect("Failed to run");
    handle.join().unwrap();

    // Depending on timing the sweep may or may not finish first, but a
    // cancelled report must never claim the full schedule count.
    if report.cancelled {
        assert!(report.total_paths_tested < 90);
    } else {
        assert_eq!(report.total_paths_tested, 90);
    }
}

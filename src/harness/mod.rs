use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diagram::{Limits, Program, validate_program};
use crate::error::ValidationError;
use crate::sim::{ScheduleGenerator, Simulator};

mod cancel;

pub use cancel::CancelToken;

/// Upper bound of the operation-limit sweep: every schedule is scored once
/// per budget in `1..=MAX_OPERATION_LIMIT`.
pub const MAX_OPERATION_LIMIT: usize = 20;

/// Ordered console inputs and the expected output trace for one test run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    #[serde(default)]
    pub inputs: Vec<i32>,
    #[serde(rename = "expectedOutputs", default)]
    pub expected_outputs: Vec<i32>,
}

/// Aggregated result of an exhaustive interleaving sweep.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// True when the sweep stopped early on a cancellation request; the
    /// tallies then cover only the schedules tested so far.
    pub cancelled: bool,
    /// Schedules scored at the representative budget `MAX_OPERATION_LIMIT`.
    pub total_paths_tested: usize,
    pub successful_paths: usize,
    /// Budget k → percentage of schedules whose output matched under k,
    /// rounded to two decimals.
    pub success_percentage_by_operation_limit: BTreeMap<usize, f64>,
}

/// Runs every enumerated schedule against a test case, across the whole
/// operation-limit sweep, and aggregates pass rates.
///
/// The run is a plain synchronous loop; a hosting service that wants progress
/// polling moves it onto a background task and keeps a [`CancelToken`] clone.
pub struct TestHarness {
    limits: Limits,
}

pub struct TestHarnessBuilder {
    limits: Limits,
}

impl TestHarnessBuilder {
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> TestHarness {
        TestHarness {
            limits: self.limits,
        }
    }
}

impl Default for TestHarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Validates the program, then replays every schedule under every budget
    /// k ∈ 1..=[`MAX_OPERATION_LIMIT`].
    ///
    /// Cancellation is checked between schedules; a cancelled sweep returns a
    /// partial report with `cancelled` set rather than an error.
    pub fn run(
        &self,
        program: &Program,
        test: &TestCase,
        cancel: &CancelToken,
    ) -> Result<TestReport, ValidationError> {
        validate_program(program, &self.limits)?;

        let simulator = Simulator::new(program);
        let mut successes = [0usize; MAX_OPERATION_LIMIT];
        let mut totals = [0usize; MAX_OPERATION_LIMIT];
        let mut report = TestReport::default();

        let mut schedules_tested = 0usize;
        for schedule in ScheduleGenerator::new(program) {
            if cancel.is_cancelled() {
                debug!("cancellation requested after {schedules_tested} schedules");
                report.cancelled = true;
                break;
            }

            for limit in 1..=MAX_OPERATION_LIMIT {
                let outputs = simulator.replay(&schedule, limit, &test.inputs);
                let success = outputs == test.expected_outputs;
                totals[limit - 1] += 1;
                if success {
                    successes[limit - 1] += 1;
                }
                // The highest budget stands in for the overall verdict.
                if limit == MAX_OPERATION_LIMIT {
                    report.total_paths_tested += 1;
                    if success {
                        report.successful_paths += 1;
                    }
                }
            }
            schedules_tested += 1;
        }

        for limit in 1..=MAX_OPERATION_LIMIT {
            let percentage = if totals[limit - 1] > 0 {
                successes[limit - 1] as f64 / totals[limit - 1] as f64 * 100.0
            } else {
                0.0
            };
            report
                .success_percentage_by_operation_limit
                .insert(limit, round_to_two_decimals(percentage));
        }

        debug!(
            "tested {schedules_tested} schedules, {}/{} matched at k={MAX_OPERATION_LIMIT}",
            report.successful_paths, report.total_paths_tested
        );
        Ok(report)
    }
}

fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

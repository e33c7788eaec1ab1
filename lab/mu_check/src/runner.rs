//! Linear suite runner.
//!
//! A [`Suite`] is an ordered list of [`TestUnit`]s fixed when it is built.
//! [`Suite::run`] invokes them one at a time, counting each invocation, and
//! stops at the first unit that fails. The count and the verdict come back
//! together in a [`SuiteReport`].

use std::time::{Duration, Instant};

use crate::outcome::{TestOutcome, UnitResult};

/// A named, zero-argument test procedure.
#[derive(Clone, Copy, Debug)]
pub struct TestUnit {
    name: &'static str,
    body: fn() -> UnitResult,
}

impl TestUnit {
    pub const fn new(name: &'static str, body: fn() -> UnitResult) -> Self {
        TestUnit { name, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the unit. Units are pure, so this can be repeated freely.
    pub fn run(&self) -> UnitResult {
        (self.body)()
    }
}

/// Record of one invoked unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitRecord {
    pub name: &'static str,
    pub outcome: TestOutcome,
    pub duration: Duration,
}

/// Result of one suite execution.
#[derive(Clone, Debug)]
pub struct SuiteReport {
    /// Name of the suite that ran.
    pub suite: &'static str,
    /// `Passed`, or the first failing unit's message verbatim.
    pub verdict: TestOutcome,
    /// Number of units invoked: the 1-based index of the first failing unit,
    /// or the suite length when every unit passed.
    pub tests_run: usize,
    /// One record per invoked unit, in execution order.
    pub results: Vec<UnitRecord>,
    /// Wall time for the whole run.
    pub duration: Duration,
}

impl SuiteReport {
    pub fn is_passed(&self) -> bool {
        self.verdict.is_passed()
    }

    /// The message the suite stopped on, if it stopped early.
    pub fn first_failure(&self) -> Option<&str> {
        self.verdict.failure_message()
    }

    /// The unit the suite stopped on. Always the last record when present.
    pub fn failed_unit(&self) -> Option<&UnitRecord> {
        self.results.last().filter(|record| record.outcome.is_failed())
    }

    /// Process exit code: 0 = all passed, 1 = a unit failed.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_passed())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(suite = self.suite))]
    fn log_outcomes(&self) {
        for record in &self.results {
            match &record.outcome {
                TestOutcome::Passed => {
                    tracing::debug!(unit = record.name, duration = ?record.duration, "passed");
                }
                TestOutcome::Failed(message) => {
                    tracing::debug!(unit = record.name, %message, "failed");
                }
            }
        }
        tracing::info!(
            tests_run = self.tests_run,
            passed = self.is_passed(),
            "suite finished in {:.2?}",
            self.duration
        );
    }
}

/// An ordered, fixed sequence of test units.
///
/// Builder methods take `self` by value, so a suite cannot be changed once it
/// is handed to the caller that runs it.
#[derive(Clone, Debug)]
pub struct Suite {
    name: &'static str,
    units: Vec<TestUnit>,
}

impl Suite {
    pub fn new(name: &'static str) -> Self {
        Suite {
            name,
            units: Vec::new(),
        }
    }

    pub fn with_units(name: &'static str, units: Vec<TestUnit>) -> Self {
        Suite { name, units }
    }

    /// Append a unit; it runs after every unit added before it.
    #[must_use]
    pub fn unit(mut self, name: &'static str, body: fn() -> UnitResult) -> Self {
        self.units.push(TestUnit::new(name, body));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[TestUnit] {
        &self.units
    }

    /// Unit names in execution order.
    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(TestUnit::name)
    }

    /// Run every unit in order until one fails.
    ///
    /// The counter is local to this call, so running the same suite twice
    /// yields the same report (modulo timings).
    pub fn run(&self) -> SuiteReport {
        let start = Instant::now();
        let mut tests_run = 0;
        let mut results = Vec::with_capacity(self.units.len());
        let mut verdict = TestOutcome::Passed;

        for unit in &self.units {
            tests_run += 1;
            let unit_start = Instant::now();
            let outcome = TestOutcome::from(unit.run());
            let duration = unit_start.elapsed();

            let stop = outcome.is_failed();
            if stop {
                verdict = outcome.clone();
            }
            results.push(UnitRecord {
                name: unit.name,
                outcome,
                duration,
            });
            if stop {
                break;
            }
        }

        let report = SuiteReport {
            suite: self.name,
            verdict,
            tests_run,
            results,
            duration: start.elapsed(),
        };
        // Logged after the loop: units themselves perform no I/O.
        report.log_outcomes();
        report
    }
}

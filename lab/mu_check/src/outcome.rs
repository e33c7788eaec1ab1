//! Assertion and unit outcomes.

/// A violated expectation.
///
/// Carries the message of the assertion that tripped. Once built it is never
/// modified; the runner forwards it verbatim as the suite verdict.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        Failure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Result of a single assertion, and of a whole test unit.
///
/// `Ok(())` is a pass. A unit is a sequence of assertions joined with `?`, so
/// its result is the first failure or `Ok(())` if it ran to the end.
pub type UnitResult = Result<(), Failure>;

/// Outcome of a test unit as recorded by the runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TestOutcome {
    /// Every assertion held.
    Passed,
    /// The first failing assertion's message.
    Failed(String),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestOutcome::Failed(_))
    }

    /// The failure message, if any.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            TestOutcome::Passed => None,
            TestOutcome::Failed(message) => Some(message),
        }
    }
}

impl From<UnitResult> for TestOutcome {
    fn from(result: UnitResult) -> Self {
        match result {
            Ok(()) => TestOutcome::Passed,
            Err(failure) => TestOutcome::Failed(failure.into_message()),
        }
    }
}

//! Rendering a [`SuiteReport`] for humans.
//!
//! ```text
//! PASS: test_hello (12.00µs)        <- verbose only, one line per invoked unit
//! FAIL: test_bool_to_string - Get string for true
//! Get string for true               <- or "ALL TESTS PASSED"
//! Tests run: 6
//! ```

use std::fmt;

use mu_check::{SuiteReport, TestOutcome};

/// Options for the printed report.
#[derive(Clone, Debug, Default)]
pub struct ReportConfig {
    /// Print a line per invoked unit before the verdict.
    pub verbose: bool,
}

/// Displayable view of a report.
pub struct Rendered<'a> {
    report: &'a SuiteReport,
    verbose: bool,
}

/// Render `report` according to `config`.
pub fn render<'a>(report: &'a SuiteReport, config: &ReportConfig) -> Rendered<'a> {
    Rendered {
        report,
        verbose: config.verbose,
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbose {
            for record in &self.report.results {
                match &record.outcome {
                    TestOutcome::Passed => {
                        writeln!(f, "PASS: {} ({:.2?})", record.name, record.duration)?;
                    }
                    TestOutcome::Failed(message) => {
                        writeln!(f, "FAIL: {} - {message}", record.name)?;
                    }
                }
            }
        }

        match self.report.first_failure() {
            Some(message) => writeln!(f, "{message}")?,
            None => writeln!(f, "ALL TESTS PASSED")?,
        }
        writeln!(f, "Tests run: {}", self.report.tests_run)
    }
}

/// Print the report to stdout.
pub fn print_report(report: &SuiteReport, config: &ReportConfig) {
    print!("{}", render(report, config));
}

#[cfg(test)]
mod tests;

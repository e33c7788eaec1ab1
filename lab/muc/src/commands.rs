//! Commands behind the `mu` binary.

use mu_subjects::hello;

use crate::report::{print_report, ReportConfig};
use crate::suite::{all_tests, lab_suite};

/// Run the lab suite, print the report, and exit: 0 if every unit passed, 1 otherwise.
pub fn run_tests(config: &ReportConfig) -> ! {
    tracing::debug!(verbose = config.verbose, "running lab suite");
    let report = all_tests();
    print_report(&report, config);
    let code = report.exit_code();
    tracing::debug!(tests_run = report.tests_run, code, "exiting");
    std::process::exit(code);
}

/// Print the unit names in execution order.
pub fn list_units() {
    let suite = lab_suite();
    tracing::debug!(suite = suite.name(), units = suite.len(), "listing units");
    for name in suite.unit_names() {
        println!("{name}");
    }
}

/// Print the greeting for `name`.
pub fn greet(name: &str) {
    println!("{}", hello(name));
}

#[cfg(test)]
mod tests;

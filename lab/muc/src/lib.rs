//! `muc` — the lab suite and the `mu` command.
//!
//! ```text
//! mu_subjects ──► suite::test_* units ──► lab_suite() ──► Suite::run
//!                                                            │
//!                                                            ▼
//!                                    report::render ◄── SuiteReport
//! ```
//!
//! [`all_tests`] is the zero-argument entry point: it runs the fixed lab
//! suite and returns the report. Everything else here is presentation.

pub mod commands;
pub mod report;
pub mod suite;

mod tracing_setup;

pub use report::{print_report, render, ReportConfig};
pub use suite::{all_tests, lab_suite};
pub use tracing_setup::init_tracing;

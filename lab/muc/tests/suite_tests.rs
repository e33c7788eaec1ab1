//! End-to-end runs of the lab suite and of hand-built suites around it.

use mu_check::{check, suite, Suite, TestOutcome, UnitResult};
use mu_subjects::{and, hello, imply, or, xor};
use muc::{all_tests, lab_suite, render, ReportConfig};
use pretty_assertions::assert_eq;

#[test]
fn lab_suite_passes_and_runs_every_unit() {
    let report = all_tests();

    assert_eq!(report.verdict, TestOutcome::Passed);
    assert_eq!(report.tests_run, lab_suite().len());
    assert_eq!(report.tests_run, 12);
    assert_eq!(report.exit_code(), 0);
    assert!(report.results.iter().all(|r| r.outcome.is_passed()));
}

#[test]
fn lab_suite_order_is_fixed() {
    let names: Vec<_> = lab_suite().unit_names().collect();
    assert_eq!(
        names,
        vec![
            "test_hello",
            "test_and",
            "test_or",
            "test_imply",
            "test_xor",
            "test_bool_to_string",
            "test_add",
            "test_factorial",
            "test_exponential",
            "test_gcd",
            "test_odds",
            "test_sum",
        ]
    );
}

#[test]
fn lab_report_renders_pass_line() {
    let report = all_tests();
    let text = render(&report, &ReportConfig::default()).to_string();
    assert_eq!(text, "ALL TESTS PASSED\nTests run: 12\n");
}

// The lab as handed out: five units filled in, `bool_to_string` still a stub.

fn stub_bool_to_string(_: bool) -> &'static str {
    ""
}

fn test_hello() -> UnitResult {
    check!(hello("Bob") == "Hello Bob!", "Didn't greet 'Bob' correctly");
    check!(hello("") == "Hello !", "Empty string failed");
    Ok(())
}

fn test_my_and() -> UnitResult {
    check!(and(true, true), "myAnd gives true when required");
    check!(!and(false, false), "myAnd(false, false)");
    check!(!and(false, true), "myAnd(false,  true)");
    check!(!and(true, false), "myAnd( true, false)");
    Ok(())
}

fn test_my_or() -> UnitResult {
    check!(!or(false, false), "myOr(false, false)");
    check!(or(true, false) && or(false, true) && or(true, true), "myOr true cases");
    Ok(())
}

fn test_my_imply() -> UnitResult {
    check!(!imply(true, false), "myImply(true, false)");
    check!(imply(false, false) && imply(false, true) && imply(true, true), "myImply true cases");
    Ok(())
}

fn test_my_xor() -> UnitResult {
    check!(xor(true, false) && xor(false, true), "myXor differing inputs");
    check!(!xor(true, true) && !xor(false, false), "myXor equal inputs");
    Ok(())
}

fn test_bool_to_string() -> UnitResult {
    check!(stub_bool_to_string(true) == "true", "Get string for true");
    check!(stub_bool_to_string(false) == "false", "Get string for false");
    Ok(())
}

#[test]
fn sixth_unit_failure_is_reported_verbatim() {
    let report = suite!(
        "lab01";
        test_hello,
        test_my_and,
        test_my_or,
        test_my_imply,
        test_my_xor,
        test_bool_to_string,
    )
    .run();

    assert_eq!(report.first_failure(), Some("Get string for true"));
    assert_eq!(report.tests_run, 6);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        render(&report, &ReportConfig::default()).to_string(),
        "Get string for true\nTests run: 6\n"
    );
}

#[test]
fn failing_unit_stops_the_suite_before_later_units() {
    fn never() -> UnitResult {
        check!(false, "never reached");
        Ok(())
    }

    let report = Suite::new("early")
        .unit("test_hello", test_hello)
        .unit("test_bool_to_string", test_bool_to_string)
        .unit("never", never)
        .run();

    assert_eq!(report.tests_run, 2);
    assert_eq!(report.failed_unit().map(|r| r.name), Some("test_bool_to_string"));
}

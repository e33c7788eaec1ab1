use super::*;
use mu_check::{ensure, Suite, UnitResult};
use pretty_assertions::assert_eq;

fn passing() -> UnitResult {
    ensure("always holds", true)
}

fn failing() -> UnitResult {
    ensure("Get string for true", false)
}

#[test]
fn test_render_all_passed() {
    let report = Suite::new("green")
        .unit("a", passing)
        .unit("b", passing)
        .run();

    let text = render(&report, &ReportConfig::default()).to_string();
    assert_eq!(text, "ALL TESTS PASSED\nTests run: 2\n");
}

#[test]
fn test_render_failure_message_and_count() {
    let report = Suite::new("red")
        .unit("a", passing)
        .unit("b", failing)
        .unit("c", passing)
        .run();

    let text = render(&report, &ReportConfig::default()).to_string();
    assert_eq!(text, "Get string for true\nTests run: 2\n");
}

#[test]
fn test_render_empty_suite() {
    let report = Suite::new("empty").run();
    let text = render(&report, &ReportConfig::default()).to_string();
    assert_eq!(text, "ALL TESTS PASSED\nTests run: 0\n");
}

#[test]
fn test_render_verbose_lists_invoked_units() {
    let report = Suite::new("red")
        .unit("test_hello", passing)
        .unit("test_bool_to_string", failing)
        .unit("never_run", passing)
        .run();

    let text = render(&report, &ReportConfig { verbose: true }).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("PASS: test_hello ("));
    assert_eq!(lines[1], "FAIL: test_bool_to_string - Get string for true");
    assert_eq!(lines[2], "Get string for true");
    assert_eq!(lines[3], "Tests run: 2");
    assert!(!text.contains("never_run"));
}

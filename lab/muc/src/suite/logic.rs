use mu_check::{check, ensure_with, for_all, UnitResult};
use mu_subjects::{and, bool_to_string, imply, or, xor};

/// Every input pair, in the order the `expected` tables below are written.
const INPUTS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

/// Check `f` against its full truth table.
fn truth_table(name: &str, f: fn(bool, bool) -> bool, expected: [bool; 4]) -> UnitResult {
    for_all(INPUTS.into_iter().zip(expected), |((x, y), want)| {
        ensure_with(f(x, y) == want, || {
            format!(
                "{name}({}, {}) should be {}",
                bool_to_string(x),
                bool_to_string(y),
                bool_to_string(want)
            )
        })
    })
}

pub(super) fn test_and() -> UnitResult {
    check!(and(true, true), "and gives true when required");
    truth_table("and", and, [false, false, false, true])
}

pub(super) fn test_or() -> UnitResult {
    check!(!or(false, false), "or gives false when both inputs are false");
    truth_table("or", or, [false, true, true, true])
}

pub(super) fn test_imply() -> UnitResult {
    check!(!imply(true, false), "true does not imply false");
    truth_table("imply", imply, [true, true, false, true])
}

pub(super) fn test_xor() -> UnitResult {
    check!(!xor(true, true), "xor of equal inputs is false");
    truth_table("xor", xor, [false, true, true, false])
}

pub(super) fn test_bool_to_string() -> UnitResult {
    check!(bool_to_string(true) == "true", "Get string for true");
    check!(bool_to_string(false) == "false", "Get string for false");
    Ok(())
}

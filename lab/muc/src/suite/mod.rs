//! The lab suite.
//!
//! Units run in the order listed in [`lab_suite`]; the suite stops at the
//! first one that fails. Each unit is a plain function built from
//! `mu_check` assertions, so a failing check returns from the unit
//! immediately.

mod arith;
mod logic;

use mu_check::{check, suite, Suite, SuiteReport, UnitResult};
use mu_subjects::hello;

use arith::{test_add, test_exponential, test_factorial, test_gcd, test_odds, test_sum};
use logic::{test_and, test_bool_to_string, test_imply, test_or, test_xor};

/// The fixed, ordered lab suite.
pub fn lab_suite() -> Suite {
    suite!(
        "lab";
        test_hello,
        test_and,
        test_or,
        test_imply,
        test_xor,
        test_bool_to_string,
        test_add,
        test_factorial,
        test_exponential,
        test_gcd,
        test_odds,
        test_sum,
    )
}

/// Run the lab suite.
pub fn all_tests() -> SuiteReport {
    lab_suite().run()
}

fn test_hello() -> UnitResult {
    check!(hello("Bob") == "Hello Bob!", "Didn't greet 'Bob' correctly");
    check!(hello("Jo") == "Hello Jo!", "Didn't greet 'Jo' correctly");
    // An empty name is an edge case, but it still works
    check!(hello("") == "Hello !", "Empty string failed");
    Ok(())
}

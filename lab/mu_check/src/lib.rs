//! `mu_check` — the testing core.
//!
//! Three layers, leaf first:
//!
//! ```text
//! ensure / check!          assertion primitive: Ok(()) or Err(Failure)
//!     │
//!     ▼
//! for_all / agree          property sweeps over small input domains
//!     │
//!     ▼
//! Suite::run ──► SuiteReport   ordered units, stops at the first failure
//! ```
//!
//! A test unit is a plain `fn() -> UnitResult`. Assertions short-circuit
//! through `?` (or the [`check!`] / [`check_eq!`] macros, which return early),
//! so nothing after a failing assertion is evaluated. The runner owns its run
//! counter and hands it back in the [`SuiteReport`]; there is no global state.

pub mod assert;
pub mod outcome;
pub mod runner;
pub mod sweep;

pub use assert::{ensure, ensure_eq, ensure_with};
pub use outcome::{Failure, TestOutcome, UnitResult};
pub use runner::{Suite, SuiteReport, TestUnit, UnitRecord};
pub use sweep::{agree, for_all, for_all_pairs, matches_reference, pairs};

/// Fail the enclosing unit with a formatted message unless `cond` holds.
///
/// ```text
/// fn test_and() -> UnitResult {
///     check!(and(true, true), "and gives true when required");
///     check!(!and(false, true), "and({}, {})", false, true);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr, $($msg:tt)+) => {
        if !($cond) {
            return Err($crate::Failure::new(format!($($msg)+)));
        }
    };
}

/// Fail the enclosing unit unless `actual == expected`.
///
/// The message names `what` and shows both values.
#[macro_export]
macro_rules! check_eq {
    ($actual:expr, $expected:expr, $what:expr $(,)?) => {
        if let Err(failure) = $crate::ensure_eq($what, &$actual, &$expected) {
            return Err(failure);
        }
    };
}

/// Build a [`Suite`] from unit functions in scope, naming each unit after its function.
///
/// Order is execution order.
///
/// ```text
/// let suite = suite!("lab01"; test_hello, test_and, test_or);
/// assert_eq!(suite.unit_names().collect::<Vec<_>>(), ["test_hello", "test_and", "test_or"]);
/// ```
#[macro_export]
macro_rules! suite {
    ($name:expr; $($unit:ident),* $(,)?) => {
        $crate::Suite::with_units(
            $name,
            vec![$($crate::TestUnit::new(stringify!($unit), $unit)),*],
        )
    };
}

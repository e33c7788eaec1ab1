//! The assertion primitive.
//!
//! Each function returns `Ok(())` when the expectation holds and a
//! [`Failure`] otherwise. Chain them with `?` inside a unit: the first
//! failure returns from the unit and later assertions never run.

use std::fmt;

use crate::outcome::{Failure, UnitResult};

/// Pass if `condition` holds, otherwise fail with `message`.
#[inline]
pub fn ensure(message: &str, condition: bool) -> UnitResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message))
    }
}

/// Like [`ensure`], but the message is only built on failure.
///
/// Used by sweeps, where formatting a message for every passing input would
/// dominate the cost of the check.
#[inline]
pub fn ensure_with(condition: bool, message: impl FnOnce() -> String) -> UnitResult {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message()))
    }
}

/// Pass if `actual == expected`.
///
/// Failure message: `{what}: expected {expected:?}, got {actual:?}`.
pub fn ensure_eq<T>(what: &str, actual: &T, expected: &T) -> UnitResult
where
    T: PartialEq + fmt::Debug + ?Sized,
{
    ensure_with(actual == expected, || {
        format!("{what}: expected {expected:?}, got {actual:?}")
    })
}

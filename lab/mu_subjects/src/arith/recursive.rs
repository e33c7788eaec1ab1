//! Recursive formulations.
//!
//! Each function handles its base case and otherwise calls itself on a
//! strictly smaller input. Self-calls go through `ensure_sufficient_stack`.

use mu_stack::ensure_sufficient_stack;

use super::{max_exponent, FACTORIAL_MAX_INPUT};
use crate::error::ArithError;

/// `add(0, y) = y`, `add(x, y) = add(x - 1, y) + 1`.
///
/// A sum past `u64::MAX` is rejected before recursing.
pub fn add(x: u64, y: u64) -> Result<u64, ArithError> {
    if x == 0 {
        return Ok(y);
    }
    if y.checked_add(x).is_none() {
        return Err(ArithError::overflow("addition"));
    }
    ensure_sufficient_stack(|| add(x - 1, y))?
        .checked_add(1)
        .ok_or(ArithError::overflow("addition"))
}

/// `factorial(0) = 1`, `factorial(x) = x * factorial(x - 1)`.
///
/// Inputs above [`FACTORIAL_MAX_INPUT`] are rejected before recursing, so the
/// depth never exceeds 20.
pub fn factorial(x: u64) -> Result<u64, ArithError> {
    if x == 0 {
        return Ok(1);
    }
    if x > FACTORIAL_MAX_INPUT {
        return Err(ArithError::overflow("factorial"));
    }
    let below = ensure_sufficient_stack(|| factorial(x - 1))?;
    below
        .checked_mul(x)
        .ok_or(ArithError::overflow("factorial"))
}

/// `exponential(c, 0) = 1`, `exponential(c, n) = exponential(c, n - 1) * c`.
///
/// Bases 0 and 1 are their own positive powers. For other bases an exponent
/// above [`max_exponent`] is rejected before recursing, so the depth never
/// exceeds 63.
pub fn exponential(c: u64, n: u32) -> Result<u64, ArithError> {
    if n == 0 {
        return Ok(1);
    }
    if c < 2 {
        return Ok(c);
    }
    if max_exponent(c).is_some_and(|max| n > max) {
        return Err(ArithError::overflow("exponential"));
    }
    let below = ensure_sufficient_stack(|| exponential(c, n - 1))?;
    below
        .checked_mul(c)
        .ok_or(ArithError::overflow("exponential"))
}

/// `gcd(x, 0) = x`, `gcd(x, y) = gcd(y, x mod y)`.
pub fn gcd(x: u64, y: u64) -> u64 {
    if y == 0 {
        return x;
    }
    ensure_sufficient_stack(|| gcd(y, x % y))
}

/// `odds(0) = []`, `odds(n) = odds(n - 1)` followed by `n` when `n` is odd.
pub fn odds(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }
    let mut found = ensure_sufficient_stack(|| odds(n - 1));
    if n % 2 == 1 {
        found.push(n);
    }
    found
}

/// `sum(0, a) = 0`, `sum(n, a) = sum(n - 1, a) + a[n - 1]`, with `n` clamped
/// to `a.len()`.
///
/// Splits off the last element of the prefix rather than the first, so
/// partial sums accumulate left to right and overflow at the same element the
/// iterative loop does.
pub fn sum(n: usize, a: &[i64]) -> Result<i64, ArithError> {
    let n = n.min(a.len());
    if n == 0 {
        return Ok(0);
    }
    let prefix = ensure_sufficient_stack(|| sum(n - 1, a))?;
    prefix
        .checked_add(a[n - 1])
        .ok_or(ArithError::overflow("sum"))
}

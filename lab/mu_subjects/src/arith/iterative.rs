//! Iterative formulations: loops over mutable accumulators.

use crate::error::ArithError;

/// Count `y` up by one, `x` times.
///
/// A sum past `u64::MAX` is rejected before counting.
pub fn add(x: u64, y: u64) -> Result<u64, ArithError> {
    if y.checked_add(x).is_none() {
        return Err(ArithError::overflow("addition"));
    }
    let mut total = y;
    let mut remaining = x;
    while remaining > 0 {
        total += 1;
        remaining -= 1;
    }
    Ok(total)
}

pub fn factorial(x: u64) -> Result<u64, ArithError> {
    let mut product: u64 = 1;
    for k in 1..=x {
        product = product
            .checked_mul(k)
            .ok_or(ArithError::overflow("factorial"))?;
    }
    Ok(product)
}

pub fn exponential(c: u64, n: u32) -> Result<u64, ArithError> {
    // 0 and 1 are fixed points; skip the loop.
    if c < 2 {
        return Ok(if n == 0 { 1 } else { c });
    }
    let mut power: u64 = 1;
    for _ in 0..n {
        power = power
            .checked_mul(c)
            .ok_or(ArithError::overflow("exponential"))?;
    }
    Ok(power)
}

pub fn gcd(x: u64, y: u64) -> u64 {
    let (mut a, mut b) = (x, y);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn odds(n: u64) -> Vec<u64> {
    let mut found = Vec::new();
    for k in (1..=n).step_by(2) {
        found.push(k);
    }
    found
}

/// Sum of `a[..n]`, with `n` clamped to `a.len()`.
pub fn sum(n: usize, a: &[i64]) -> Result<i64, ArithError> {
    let mut total: i64 = 0;
    for &element in a.iter().take(n) {
        total = total
            .checked_add(element)
            .ok_or(ArithError::overflow("sum"))?;
    }
    Ok(total)
}

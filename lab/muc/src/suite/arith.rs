//! Dual-implementation units.
//!
//! Every unit follows the same shape: base cases, agreement of the recursive
//! and iterative variants over a small exhaustive range, the function's
//! algebraic laws, then its overflow boundary.

use std::ops::RangeInclusive;

use mu_check::{
    agree, check, check_eq, ensure_with, for_all, for_all_pairs, matches_reference, pairs,
    Failure, UnitResult,
};
use mu_subjects::{iterative, max_exponent, recursive, FACTORIAL_MAX_INPUT};

const SMALL: RangeInclusive<u64> = 0..=99;

const SEQUENCE: [i64; 8] = [3, -1, 4, 1, -5, 9, 2, -6];

pub(super) fn test_add() -> UnitResult {
    for_all(SMALL, |x| {
        ensure_with(
            recursive::add(0, x) == Ok(x) && iterative::add(0, x) == Ok(x),
            || format!("add(0, {x}) should be {x}"),
        )?;
        ensure_with(
            recursive::add(x, 0) == Ok(x) && iterative::add(x, 0) == Ok(x),
            || format!("add({x}, 0) should be {x}"),
        )
    })?;

    agree(
        "add",
        pairs(SMALL, SMALL),
        |&(x, y)| recursive::add(x, y),
        |&(x, y)| iterative::add(x, y),
    )?;

    for_all_pairs(SMALL, SMALL, |x, y| {
        ensure_with(recursive::add(x, y) == Ok(x + y), || {
            format!("add({x}, {y}) should be {}", x + y)
        })?;
        ensure_with(recursive::add(x, y) == recursive::add(y, x), || {
            format!("recursive add is not commutative on ({x}, {y})")
        })?;
        ensure_with(iterative::add(x, y) == iterative::add(y, x), || {
            format!("iterative add is not commutative on ({x}, {y})")
        })
    })
}

pub(super) fn test_factorial() -> UnitResult {
    check_eq!(recursive::factorial(0), Ok(1), "recursive factorial(0)");
    check_eq!(iterative::factorial(0), Ok(1), "iterative factorial(0)");

    // Past the boundary too: both variants must overflow on the same inputs.
    agree(
        "factorial",
        0..=FACTORIAL_MAX_INPUT + 10,
        |&x| recursive::factorial(x),
        |&x| iterative::factorial(x),
    )?;

    for_all(1..=10, |x| {
        let step = recursive::factorial(x - 1)
            .ok()
            .and_then(|below| below.checked_mul(x));
        ensure_with(recursive::factorial(x).ok() == step, || {
            format!("factorial({x}) should be {x} * factorial({})", x - 1)
        })
    })?;

    check!(
        recursive::factorial(FACTORIAL_MAX_INPUT).is_ok(),
        "factorial({FACTORIAL_MAX_INPUT}) should fit in u64"
    );
    check!(
        recursive::factorial(FACTORIAL_MAX_INPUT + 1).is_err(),
        "factorial({}) should overflow u64",
        FACTORIAL_MAX_INPUT + 1
    );
    Ok(())
}

pub(super) fn test_exponential() -> UnitResult {
    for_all(0..=10_u64, |c| {
        ensure_with(
            recursive::exponential(c, 0) == Ok(1) && iterative::exponential(c, 0) == Ok(1),
            || format!("exponential({c}, 0) should be 1"),
        )
    })?;

    agree(
        "exponential",
        pairs(0..=10_u64, 0..=20_u32),
        |&(c, n)| recursive::exponential(c, n),
        |&(c, n)| iterative::exponential(c, n),
    )?;

    for_all_pairs(0..=10_u64, 0..=12_u32, |c, n| {
        let next = recursive::exponential(c, n)
            .ok()
            .and_then(|power| power.checked_mul(c));
        ensure_with(recursive::exponential(c, n + 1).ok() == next, || {
            format!("exponential({c}, {}) should be {c} * exponential({c}, {n})", n + 1)
        })
    })?;

    for_all(2..=16_u64, |c| {
        let Some(n) = max_exponent(c) else {
            return Err(Failure::new(format!("base {c} should have an overflow boundary")));
        };
        ensure_with(
            recursive::exponential(c, n).is_ok() && iterative::exponential(c, n).is_ok(),
            || format!("{c}^{n} should fit in u64"),
        )?;
        ensure_with(
            recursive::exponential(c, n + 1).is_err() && iterative::exponential(c, n + 1).is_err(),
            || format!("{c}^{} should overflow u64", n + 1),
        )
    })
}

/// Largest common divisor found by trying every candidate.
fn brute_force_gcd(x: u64, y: u64) -> u64 {
    if x == 0 || y == 0 {
        return x.max(y);
    }
    (1..=x.min(y))
        .filter(|d| x % d == 0 && y % d == 0)
        .max()
        .unwrap_or(1)
}

pub(super) fn test_gcd() -> UnitResult {
    check_eq!(recursive::gcd(0, 0), 0, "recursive gcd(0, 0)");
    check_eq!(iterative::gcd(0, 0), 0, "iterative gcd(0, 0)");

    for_all(1..=50_u64, |x| {
        ensure_with(
            recursive::gcd(x, 0) == x && iterative::gcd(x, 0) == x,
            || format!("gcd({x}, 0) should be {x}"),
        )
    })?;

    agree(
        "gcd",
        pairs(0..=50_u64, 0..=50_u64),
        |&(x, y)| recursive::gcd(x, y),
        |&(x, y)| iterative::gcd(x, y),
    )?;

    for_all_pairs(1..=50_u64, 1..=50_u64, |x, y| {
        ensure_with(recursive::gcd(x, y) == recursive::gcd(y, x % y), || {
            format!("gcd({x}, {y}) should equal gcd({y}, {})", x % y)
        })
    })?;

    matches_reference(
        "gcd",
        pairs(1..=50_u64, 1..=50_u64),
        |&(x, y)| recursive::gcd(x, y),
        |&(x, y)| brute_force_gcd(x, y),
    )
}

pub(super) fn test_odds() -> UnitResult {
    check!(
        recursive::odds(0).is_empty() && iterative::odds(0).is_empty(),
        "odds(0) should be empty"
    );

    agree("odds", SMALL, |&n| recursive::odds(n), |&n| iterative::odds(n))?;

    matches_reference(
        "odds",
        SMALL,
        |&n| recursive::odds(n),
        |&n| (0..=n).filter(|k| k % 2 == 1).collect::<Vec<_>>(),
    )
}

pub(super) fn test_sum() -> UnitResult {
    check_eq!(recursive::sum(0, &SEQUENCE), Ok(0), "recursive sum of no elements");
    check_eq!(iterative::sum(0, &[]), Ok(0), "iterative sum of an empty sequence");

    agree(
        "sum",
        0..=SEQUENCE.len() + 3,
        |&n| recursive::sum(n, &SEQUENCE),
        |&n| iterative::sum(n, &SEQUENCE),
    )?;

    for_all(1..=SEQUENCE.len(), |n| {
        let step = recursive::sum(n - 1, &SEQUENCE)
            .ok()
            .and_then(|prefix| prefix.checked_add(SEQUENCE[n - 1]));
        ensure_with(recursive::sum(n, &SEQUENCE).ok() == step, || {
            format!("sum({n}) should be sum({}) + {}", n - 1, SEQUENCE[n - 1])
        })
    })?;

    check!(
        recursive::sum(SEQUENCE.len() + 5, &SEQUENCE) == recursive::sum(SEQUENCE.len(), &SEQUENCE),
        "sum past the end should sum the whole sequence"
    );
    check!(
        recursive::sum(2, &[i64::MAX, 1]).is_err() && iterative::sum(2, &[i64::MAX, 1]).is_err(),
        "sum past i64::MAX should overflow"
    );
    Ok(())
}

#[cfg(test)]
mod tests;

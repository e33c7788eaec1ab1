//! Arithmetic on naturals, written twice.
//!
//! [`recursive`] and [`iterative`] export the same six functions with the same
//! signatures:
//!
//! | Function | Value | Base case |
//! |---|---|---|
//! | `add(x, y)` | x + y | `add(0, y) = y` |
//! | `factorial(x)` | x! | `factorial(0) = 1` |
//! | `exponential(c, n)` | cⁿ | `exponential(c, 0) = 1`, including 0⁰ |
//! | `gcd(x, y)` | Euclid | `gcd(x, 0) = x`, so `gcd(0, 0) = 0` |
//! | `odds(n)` | odd k in [0, n], ascending | `odds(0) = []` |
//! | `sum(n, a)` | a[0] + … + a[n-1] | `sum(0, a) = 0` |
//!
//! `sum` clamps `n` to `a.len()`: asking for more elements than exist sums
//! the whole slice.
//!
//! # Overflow boundaries
//!
//! Naturals are `u64`, `sum` elements are `i64`. Both variants use checked
//! arithmetic on every step and build results in the same order, so they hit
//! [`ArithError::Overflow`](crate::ArithError::Overflow) on exactly the same
//! inputs:
//!
//! - `factorial(x)` is representable for `x <= FACTORIAL_MAX_INPUT` (20).
//! - `exponential(c, n)` is representable for `n <= max_exponent(c)`; bases
//!   0 and 1 never overflow.
//! - `add` overflows only when `x + y > u64::MAX`, `sum` when a running
//!   prefix total leaves the `i64` range. `gcd` and `odds` never overflow.
//!
//! Out-of-range `factorial` and `exponential` arguments, and `add` arguments
//! whose sum overflows, are rejected before any recursion.
//!
//! # Recursion depth
//!
//! | Function | Depth |
//! |---|---|
//! | `factorial(x)` | at most 20 |
//! | `exponential(c, n)` | at most 63 |
//! | `gcd(x, y)` | logarithmic in `min(x, y)` |
//! | `add(x, y)` | `x` |
//! | `odds(n)` | `n` |
//! | `sum(n, a)` | `min(n, a.len())` |
//!
//! Frames beyond the thread stack live on heap segments grown by `mu_stack`,
//! so the linear-depth functions are bounded by memory, not by the thread
//! stack. Depths in the low millions are fine; `add` or `odds` with inputs in
//! the hundreds of millions can exhaust memory and abort. Large `odds(n)` also
//! allocates `n / 2` elements in both variants.

pub mod iterative;
pub mod recursive;

/// Largest `x` with `x!` representable in `u64`.
///
/// 20! = 2 432 902 008 176 640 000; 21! exceeds `u64::MAX`.
pub const FACTORIAL_MAX_INPUT: u64 = 20;

/// Largest `n` with `base.pow(n)` representable in `u64`.
///
/// `None` for bases 0 and 1, whose powers never overflow.
pub fn max_exponent(base: u64) -> Option<u32> {
    if base < 2 {
        return None;
    }
    Some(u64::MAX.ilog(base))
}

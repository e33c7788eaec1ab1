//! Stack growth for recursive subject functions.
//!
//! The recursive half of each dual implementation recurses once per unit of
//! its input (`add(x, y)` is `x` frames deep, `odds(n)` is `n` frames deep).
//! Those depths are fine for the swept ranges but not for arbitrary inputs,
//! so every self-call goes through [`ensure_sufficient_stack`], which moves
//! the recursion onto freshly allocated heap segments when the thread stack
//! runs low. Depth is then bounded by memory; a failed segment allocation
//! still panics.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: plain call.

/// Grow when less than this much stack remains (64KB).
///
/// One subject frame is a few hundred bytes at most (a closure, a `Result`
/// and a return address), far below what a 64KB margin covers.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (2MB).
///
/// The recursion here is linear in the input, so depth reaches the hundreds
/// of thousands. Larger segments mean fewer segment switches and mappings
/// for that depth.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn add(x: u64, y: u64) -> Result<u64, ArithError> {
///     if x == 0 {
///         return Ok(y);
///     }
///     ensure_sufficient_stack(|| add(x - 1, y))?.checked_add(1).ok_or(...)
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

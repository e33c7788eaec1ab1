//! Functions under test.
//!
//! - [`logic`]: boolean connectives with fixed truth tables, plus
//!   [`bool_to_string`] for diagnostics.
//! - [`recursive`] / [`iterative`]: the same arithmetic functions written
//!   twice, once by self-reference and once with loops and accumulators.
//!   Nothing ties the two modules together; that they agree is a claim the
//!   lab suite checks, not something the types enforce.
//! - [`greeting`]: the `hello` helper.
//!
//! Every function here is total. Results that would not fit in the integer
//! width come back as [`ArithError::Overflow`]; nothing panics or wraps.

pub mod arith;
mod error;
pub mod greeting;
pub mod logic;

pub use arith::{iterative, max_exponent, recursive, FACTORIAL_MAX_INPUT};
pub use error::ArithError;
pub use greeting::hello;
pub use logic::{and, bool_to_string, imply, or, xor};

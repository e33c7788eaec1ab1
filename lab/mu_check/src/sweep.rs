//! Property sweeps.
//!
//! A sweep runs one check over every input of a small, explicit domain and
//! stops at the first input that fails. The interesting sweeps compare two
//! independent implementations of the same function ([`agree`]) or a subject
//! against a brute-force reference ([`matches_reference`]); the rest of the
//! algebraic laws (identity, commutativity) are written as plain closures over
//! [`for_all`] / [`for_all_pairs`].
//!
//! Inputs are visited in iteration order, so the reported failure is always
//! the smallest failing input of an ascending range.

use std::fmt;

use crate::assert::ensure_with;
use crate::outcome::UnitResult;

/// Check `prop` on every input, in order, stopping at the first failure.
pub fn for_all<I, F>(inputs: I, prop: F) -> UnitResult
where
    I: IntoIterator,
    F: FnMut(I::Item) -> UnitResult,
{
    inputs.into_iter().try_for_each(prop)
}

/// Every `(x, y)` with `x` from `xs` and `y` from `ys`, row-major.
pub fn pairs<X, Y>(xs: X, ys: Y) -> impl Iterator<Item = (X::Item, Y::Item)>
where
    X: IntoIterator,
    X::Item: Clone,
    Y: IntoIterator + Clone,
{
    xs.into_iter()
        .flat_map(move |x| ys.clone().into_iter().map(move |y| (x.clone(), y)))
}

/// Check `prop` on the cartesian product of `xs` and `ys`.
pub fn for_all_pairs<X, Y, F>(xs: X, ys: Y, mut prop: F) -> UnitResult
where
    X: IntoIterator,
    X::Item: Clone,
    Y: IntoIterator + Clone,
    F: FnMut(X::Item, Y::Item) -> UnitResult,
{
    for_all(pairs(xs, ys), |(x, y)| prop(x, y))
}

/// Dual-implementation equivalence: `recursive` and `iterative` must return
/// equal results on every input.
///
/// Both sides are evaluated for each input before comparing, so a variant
/// that reports an error where the other returns a value is a disagreement,
/// not a skipped input.
pub fn agree<T, R, F, G>(
    name: &str,
    inputs: impl IntoIterator<Item = T>,
    recursive: F,
    iterative: G,
) -> UnitResult
where
    T: fmt::Debug,
    R: PartialEq + fmt::Debug,
    F: Fn(&T) -> R,
    G: Fn(&T) -> R,
{
    for_all(inputs, |input| {
        let rec = recursive(&input);
        let iter = iterative(&input);
        ensure_with(rec == iter, || {
            format!("recursive and iterative {name} disagree on {input:?}: {rec:?} vs {iter:?}")
        })
    })
}

/// `subject` must match a slow but obviously correct `reference` on every input.
pub fn matches_reference<T, R, F, G>(
    name: &str,
    inputs: impl IntoIterator<Item = T>,
    subject: F,
    reference: G,
) -> UnitResult
where
    T: fmt::Debug,
    R: PartialEq + fmt::Debug,
    F: Fn(&T) -> R,
    G: Fn(&T) -> R,
{
    for_all(inputs, |input| {
        let actual = subject(&input);
        let expected = reference(&input);
        ensure_with(actual == expected, || {
            format!("{name} on {input:?}: got {actual:?}, reference gives {expected:?}")
        })
    })
}

#[cfg(test)]
mod tests;

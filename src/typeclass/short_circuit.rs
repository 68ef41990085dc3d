//! Short-circuiting containers and the aggregation algorithm built on them.
//!
//! Every container in this crate has one "success" variant and one or more
//! variants that stop a computation. [`ShortCircuit`] exposes that split the
//! same way `std::ops::Try` does: [`branch`](ShortCircuit::branch) yields
//! either the success payload or a *residual*, which is the container
//! re-typed with an uninhabited success slot so it can be rebuilt at any
//! other payload type.
//!
//! The aggregation combinators are written once here, and every container's
//! `all`, `record`, `values`, `some` and `apply_all` delegate to them:
//!
//! | Function | Container method | Result |
//! |---|---|---|
//! | [`sequence`] | `all` | success of all payloads, or the first residual |
//! | [`sequence_record`] | `record` | same over `(key, container)` pairs |
//! | [`successes`] | `values` | success payloads only, in order |
//! | [`first_success`] | `some` | first success, else first failure |
//! | [`apply_all`] | `apply_all` | `sequence` followed by a function call |
//!
//! Traversal stops at the first residual: later containers are not
//! inspected, and "first" always means first by position.
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::{Maybe, Result};
//! use remonad::typeclass::{sequence, successes};
//!
//! let all = sequence(vec![Maybe::Just(1), Maybe::Just(2)]);
//! assert_eq!(all, Maybe::Just(vec![1, 2]));
//!
//! let failed = sequence(vec![Result::Ok(1), Result::Err("a"), Result::Err("b")]);
//! assert_eq!(failed, Result::Err("a"));
//!
//! let kept = successes(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]);
//! assert_eq!(kept, vec![1, 3]);
//! ```

use std::hash::Hash;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use super::higher::TypeConstructor;

/// A container with a single success variant and short-circuiting others.
///
/// # Laws
///
/// 1. `C::from_output(a).branch() == ControlFlow::Continue(a)`
/// 2. If `c.branch()` is `Break(r)`, then `C::from_residual(r)` is `c` with
///    its success type changed, holding the same tag and failure payload.
/// 3. `c.is_success()` is `true` exactly when `c.branch()` continues.
pub trait ShortCircuit: TypeConstructor + Sized {
    /// The non-success part of the container, independent of `Inner`.
    type Residual;

    /// Returns `true` for the success variant.
    fn is_success(&self) -> bool;

    /// Splits the container into its success payload or its residual.
    fn branch(self) -> ControlFlow<Self::Residual, Self::Inner>;

    /// Builds the success variant holding `output`.
    fn from_output<B>(output: B) -> Self::WithType<B>;

    /// Rebuilds a non-success container from a residual.
    fn from_residual<B>(residual: Self::Residual) -> Self::WithType<B>;
}

/// Collects the payloads of every container, stopping at the first residual.
///
/// An empty input yields a success holding an empty vector.
///
/// # Examples
///
/// ```rust
/// use remonad::control::RemoteData;
/// use remonad::typeclass::sequence;
///
/// let states: Vec<RemoteData<&str, i32>> =
///     vec![RemoteData::Loading, RemoteData::Failure("e"), RemoteData::StandBy];
/// assert_eq!(sequence(states), RemoteData::Loading);
/// ```
pub fn sequence<C, I>(containers: I) -> C::WithType<Vec<C::Inner>>
where
    C: ShortCircuit,
    I: IntoIterator<Item = C>,
{
    let iterator = containers.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for container in iterator {
        match container.branch() {
            ControlFlow::Continue(value) => values.push(value),
            ControlFlow::Break(residual) => return C::from_residual(residual),
        }
    }
    C::from_output(values)
}

/// Keyed version of [`sequence`].
///
/// Keys keep their input order in the returned [`IndexMap`]. A repeated key
/// keeps its first position and its last value, as [`IndexMap::insert`] does.
///
/// # Examples
///
/// ```rust
/// use remonad::control::{Maybe, Result};
/// use remonad::typeclass::sequence_record;
///
/// let record = sequence_record(vec![
///     ("a", Result::Ok(1)),
///     ("b", Result::Err("x")),
///     ("c", Result::Ok(3)),
/// ]);
/// assert_eq!(record.get_error(), Maybe::Just("x"));
/// ```
pub fn sequence_record<K, C, I>(entries: I) -> C::WithType<IndexMap<K, C::Inner>>
where
    K: Hash + Eq,
    C: ShortCircuit,
    I: IntoIterator<Item = (K, C)>,
{
    let iterator = entries.into_iter();
    let mut record = IndexMap::with_capacity(iterator.size_hint().0);
    for (key, container) in iterator {
        match container.branch() {
            ControlFlow::Continue(value) => {
                record.insert(key, value);
            }
            ControlFlow::Break(residual) => return C::from_residual(residual),
        }
    }
    C::from_output(record)
}

/// Keeps the success payloads and drops everything else, preserving order.
pub fn successes<C, I>(containers: I) -> Vec<C::Inner>
where
    C: ShortCircuit,
    I: IntoIterator<Item = C>,
{
    containers
        .into_iter()
        .filter_map(|container| match container.branch() {
            ControlFlow::Continue(value) => Some(value),
            ControlFlow::Break(_) => None,
        })
        .collect()
}

/// Returns the first success, otherwise the first container seen.
///
/// This is a left fold with a receiver-biased `or`: a success anywhere wins,
/// and among failures the earliest one is kept. `None` means the input was
/// empty.
///
/// # Examples
///
/// ```rust
/// use remonad::control::Result;
/// use remonad::typeclass::first_success;
///
/// let picked = first_success(vec![Result::Err("a"), Result::Ok(2), Result::Ok(3)]);
/// assert_eq!(picked, Some(Result::Ok(2)));
///
/// let failed: Option<Result<&str, i32>> = first_success(vec![Result::Err("a"), Result::Err("b")]);
/// assert_eq!(failed, Some(Result::Err("a")));
/// ```
pub fn first_success<C, I>(containers: I) -> Option<C>
where
    C: ShortCircuit,
    I: IntoIterator<Item = C>,
{
    let mut first_failure = None;
    for container in containers {
        if container.is_success() {
            return Some(container);
        }
        if first_failure.is_none() {
            first_failure = Some(container);
        }
    }
    first_failure
}

/// Sequences the containers and spreads the payloads into `function`.
///
/// `function` is only called when every container is a success.
///
/// # Examples
///
/// ```rust
/// use remonad::control::Maybe;
/// use remonad::typeclass::apply_all;
///
/// let total = apply_all(|values: Vec<i32>| values.iter().sum::<i32>(), vec![Maybe::Just(1), Maybe::Just(2)]);
/// assert_eq!(total, Maybe::Just(3));
/// ```
pub fn apply_all<C, I, F, B>(function: F, containers: I) -> C::WithType<B>
where
    C: ShortCircuit,
    I: IntoIterator<Item = C>,
    F: FnOnce(Vec<C::Inner>) -> B,
{
    let mut values = Vec::new();
    for container in containers {
        match container.branch() {
            ControlFlow::Continue(value) => values.push(value),
            ControlFlow::Break(residual) => return C::from_residual(residual),
        }
    }
    C::from_output(function(values))
}

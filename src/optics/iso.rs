//! Iso optics: lossless conversions between two representations.
//!
//! # Laws
//!
//! 1. `iso.reverse_get(iso.get(source)) == source`
//! 2. `iso.get(iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use remonad::control::Tuple;
//! use remonad::optics::{FunctionIso, Iso};
//!
//! let pair = FunctionIso::new(Tuple::<i32, char>::to_pair, Tuple::from);
//!
//! assert_eq!(pair.get(Tuple::of(1, 'a')), (1, 'a'));
//! assert_eq!(pair.reverse().get((2, 'b')), Tuple::of(2, 'b'));
//! ```

use std::marker::PhantomData;

/// A pair of mutually inverse functions.
pub trait Iso<S, A> {
    /// Converts `S` to `A`.
    fn get(&self, source: S) -> A;

    /// Converts `A` back to `S`.
    fn reverse_get(&self, value: A) -> S;

    /// Swaps the two directions.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Edits `source` through the `A` representation.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(source)))
    }

    /// Chains a further conversion `A <-> B`.
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }
}

/// An iso built from two closures.
pub struct FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: R,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R> FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    /// Creates an iso; the two functions must be inverse to each other.
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: R) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R> Iso<S, A> for FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, R> Clone for FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A + Clone,
    R: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.get_function.clone(), self.reverse_get_function.clone())
    }
}

impl<S, A, G, R> std::fmt::Debug for FunctionIso<S, A, G, R>
where
    G: Fn(S) -> A,
    R: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .finish_non_exhaustive()
    }
}

/// An iso with its directions swapped; see [`Iso::reverse`].
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for ReversedIso<I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("inner", &self.inner)
            .finish()
    }
}

/// Two isos chained: `S <-> A <-> B`.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Result};
    use rstest::rstest;

    fn either_result() -> impl Iso<Either<String, i32>, Result<String, i32>> + Clone {
        FunctionIso::new(Either::to_result, Result::to_either)
    }

    fn celsius_fahrenheit() -> impl Iso<f64, f64> {
        FunctionIso::new(|c: f64| c * 9.0 / 5.0 + 32.0, |f: f64| (f - 32.0) * 5.0 / 9.0)
    }

    #[rstest]
    #[case(Either::Right(3), Result::Ok(3))]
    #[case(Either::Left("e".to_string()), Result::Err("e".to_string()))]
    fn test_round_trip_between_containers(
        #[case] either: Either<String, i32>,
        #[case] result: Result<String, i32>,
    ) {
        let iso = either_result();
        assert_eq!(iso.get(either.clone()), result);
        assert_eq!(iso.reverse_get(result), either);
    }

    #[rstest]
    fn test_modify_through_other_representation() {
        let shifted = celsius_fahrenheit().modify(100.0, |f| f - 180.0);
        assert!(shifted.abs() < 1e-9);
    }

    #[rstest]
    fn test_reverse_swaps_directions() {
        let iso = either_result().reverse();
        assert_eq!(iso.get(Result::Ok(1)), Either::Right(1));
    }

    #[rstest]
    fn test_compose() {
        let to_maybe = FunctionIso::new(Maybe::<i32>::get, Maybe::from);
        let pipeline = FunctionIso::new(Some, |o: Option<i32>| o.unwrap_or_default())
            .compose(to_maybe.reverse());

        assert_eq!(pipeline.get(4), Maybe::Just(4));
        assert_eq!(pipeline.reverse_get(Maybe::Just(9)), 9);
    }
}

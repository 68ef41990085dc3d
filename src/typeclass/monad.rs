//! Monad type class - sequencing computations with dependency.
//!
//! `flat_map` feeds the success payload into a function that returns the
//! same container, and never double-wraps: the callback's container is the
//! result. A failure-like variant stops the chain and the callback is not
//! called.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   // left identity
//! m.flat_map(pure) == m                                         // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::Maybe;
//! use remonad::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Maybe::Just(8).flat_map(half).flat_map(half), Maybe::Just(2));
//! assert_eq!(Maybe::Just(6).flat_map(half).flat_map(half), Maybe::Nothing);
//! ```

use super::applicative::Applicative;

/// A type class for applicatives that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(5).then(Maybe::Just("hello")), Maybe::Just("hello"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("hello")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, RemoteData, Result};
    use rstest::rstest;

    fn parse(input: &str) -> Result<String, i32> {
        input
            .parse::<i32>()
            .map_err(|error| error.to_string())
            .into()
    }

    #[rstest]
    fn result_left_identity_law() {
        let pure: Result<String, &str> = Result::Ok("42");
        assert_eq!(pure.flat_map(parse), parse("42"));
    }

    #[rstest]
    fn maybe_right_identity_law() {
        let value = Maybe::Just(3);
        assert_eq!(value.flat_map(Maybe::Just), Maybe::Just(3));
    }

    #[rstest]
    fn either_and_then_short_circuits_on_left() {
        let left: Either<&str, i32> = Either::Left("stop");
        let result = left.and_then(|_| -> Either<&str, i32> { panic!("must not be called") });
        assert_eq!(result, Either::Left("stop"));
    }

    #[rstest]
    fn remote_data_then_keeps_loading() {
        let loading: RemoteData<(), i32> = RemoteData::Loading;
        assert_eq!(loading.then(RemoteData::Success(1)), RemoteData::Loading);
    }
}

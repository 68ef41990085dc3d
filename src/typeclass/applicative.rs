//! Applicative type class - applying functions within containers.
//!
//! `Applicative` adds two things on top of [`Functor`]: lifting a plain
//! value with `pure`, and combining independent containers with `map2`,
//! `map3` or `apply`. Multi-argument functions are applied one container at
//! a time by currying them first (see [`curry2!`](crate::curry2)).
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                         // identity
//! pure(f).apply(pure(x)) == pure(f(x))              // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)       // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::Maybe;
//! use remonad::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Just(42));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
///
/// When more than one argument is a failure, the leftmost one wins.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    /// use remonad::typeclass::Applicative;
    ///
    /// let ok: Result<String, i32> = <Result<String, ()>>::pure(7);
    /// assert_eq!(ok, Result::Ok(7));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y), Maybe::Just(3));
    /// assert_eq!(Maybe::Just(1).map2(Maybe::<i32>::Nothing, |x, y| x + y), Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function held by `self` to the value held by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::curry2;
    /// use remonad::typeclass::Applicative;
    ///
    /// let add = curry2!(|a: i32, b: i32| a + b);
    /// let result = Applicative::apply(Maybe::Just(add), Maybe::Just(1));
    /// assert_eq!(Applicative::apply(result, Maybe::Just(2)), Maybe::Just(3));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

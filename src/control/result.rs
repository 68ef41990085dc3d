//! Result type - a success value or a typed error.
//!
//! `Result<E, A>` is either `Ok(A)` or `Err(E)`. The error parameter comes
//! first so that the success slot is the last one, like every other
//! container here. It converts losslessly to and from
//! `std::result::Result<A, E>`, so `?`-based code can hand its results over
//! with `.into()` and take them back with [`Result::into_std`].
//!
//! The type is named after its role, which means it shadows the standard
//! `Result` when imported by name. The prelude leaves it out for that reason.
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::{Maybe, Result};
//!
//! fn parse(text: &str) -> Result<String, i32> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Result::Ok(42));
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.clone().get_error().is_just());
//! assert_eq!(failed.get_or_else(0), 0);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use super::either::Either;
use super::maybe::Maybe;
use crate::compose::identity;
use crate::typeclass::{
    Applicative, Functor, Monad, ShortCircuit, TypeConstructor, apply_all, first_success,
    sequence, sequence_record, successes,
};

/// A success value (`Ok`) or an error (`Err`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<E, A> {
    /// The success variant.
    Ok(A),
    /// The error variant.
    Err(E),
}

impl<E, A> Result<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` for `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Mapping and Sequencing
    // =========================================================================

    /// Transforms the success value. An `Err` passes through unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Result<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Transforms the error. An `Ok` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    ///
    /// let failed: Result<&str, i32> = Result::Err("io");
    /// assert_eq!(failed.map_error(|e| format!("wrapped: {e}")), Result::Err("wrapped: io".to_string()));
    /// ```
    #[inline]
    pub fn map_error<T, F>(self, function: F) -> Result<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    /// Transforms whichever side is present.
    ///
    /// # Arguments
    ///
    /// * `on_error` - Applied to the error of an `Err`
    /// * `on_value` - Applied to the value of an `Ok`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    ///
    /// let parsed: Result<&str, i32> = Result::Ok(4);
    /// assert_eq!(parsed.map_both(str::len, |n| n * 2), Result::Ok(8));
    ///
    /// let failed: Result<&str, i32> = Result::Err("bad");
    /// assert_eq!(failed.map_both(str::len, |n| n * 2), Result::Err(3));
    /// ```
    #[inline]
    pub fn map_both<T, B, F, G>(self, on_error: F, on_value: G) -> Result<T, B>
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Ok(value) => Result::Ok(on_value(value)),
            Self::Err(error) => Result::Err(on_error(error)),
        }
    }

    /// Feeds the success value into a function returning another `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    ///
    /// let positive = |n: i32| if n > 0 { Result::Ok(n) } else { Result::Err("not positive") };
    /// assert_eq!(Result::Ok(3).chain(positive), Result::Ok(3));
    /// assert_eq!(Result::Ok(-3).chain(positive), Result::Err("not positive"));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Result<E, B>
    where
        F: FnOnce(A) -> Result<E, B>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns `self` if it is `Ok`, else `other` if that is `Ok`, else `self`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (ok @ Self::Ok(_), _) | (Self::Err(_), ok @ Self::Ok(_)) => ok,
            (error @ Self::Err(_), Self::Err(_)) => error,
        }
    }

    /// Prefers `other`: `a.or_else(b) == b.or(a)`.
    #[inline]
    #[must_use]
    pub fn or_else(self, other: Self) -> Self {
        other.or(self)
    }

    /// Replaces an `Err` with `Ok(value)`.
    ///
    /// # Returns
    ///
    /// `self` when it is `Ok`, otherwise `Ok(value)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    ///
    /// let failed: Result<&str, u16> = Result::Err("unset");
    /// assert_eq!(failed.with_default(8080), Result::Ok(8080));
    /// assert_eq!(Result::<&str, u16>::Ok(443).with_default(8080), Result::Ok(443));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_default(self, value: A) -> Self {
        match self {
            ok @ Self::Ok(_) => ok,
            Self::Err(_) => Self::Ok(value),
        }
    }

    // =========================================================================
    // Elimination and Conversion
    // =========================================================================

    /// Eliminates the `Result` with one handler per variant.
    #[inline]
    pub fn fold<T, F, G>(self, on_ok: F, on_err: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Returns the success value, or `default` for an `Err`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// The success value as a `Maybe`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Maybe, Result};
    ///
    /// assert_eq!(Result::<&str, i32>::Ok(1).get_value(), Maybe::Just(1));
    /// assert_eq!(Result::<&str, i32>::Err("e").get_value(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn get_value(self) -> Maybe<A> {
        match self {
            Self::Ok(value) => Maybe::Just(value),
            Self::Err(_) => Maybe::Nothing,
        }
    }

    /// The error as a `Maybe`.
    #[inline]
    pub fn get_error(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::Nothing,
            Self::Err(error) => Maybe::Just(error),
        }
    }

    /// Same as [`Result::get_value`]: the error is dropped.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        self.get_value()
    }

    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    pub fn to_either(self) -> Either<E, A> {
        match self {
            Self::Ok(value) => Either::Right(value),
            Self::Err(error) => Either::Left(error),
        }
    }

    /// Converts to the standard library `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    ///
    /// fn checked(value: Result<String, u8>) -> std::result::Result<u8, String> {
    ///     let byte = value.into_std()?;
    ///     Ok(byte + 1)
    /// }
    ///
    /// assert_eq!(checked(Result::Ok(1)), Ok(2));
    /// assert_eq!(checked(Result::Err("no".into())), Err("no".to_string()));
    /// ```
    #[inline]
    pub fn into_std(self) -> std::result::Result<A, E> {
        self.into()
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// `Ok` of every value, or the first `Err` by position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    ///
    /// assert_eq!(Result::all(vec![Result::Ok(1), Result::Err("a"), Result::Err("b")]), Result::Err("a"));
    /// assert_eq!(Result::<&str, i32>::all(vec![]), Result::Ok(vec![]));
    /// ```
    #[inline]
    pub fn all<I>(items: I) -> Result<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        sequence(items)
    }

    /// The first `Ok`, otherwise the first `Err`. `None` for empty input.
    #[inline]
    pub fn some<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        first_success(items)
    }

    /// The `Ok` values, in order.
    #[inline]
    pub fn values<I>(items: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        successes(items)
    }

    /// Keyed version of [`Result::all`]; key order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Maybe, Result};
    ///
    /// let record = Result::record(vec![
    ///     ("a", Result::Ok(1)),
    ///     ("b", Result::Err("x")),
    ///     ("c", Result::Ok(3)),
    /// ]);
    /// assert_eq!(record.get_error(), Maybe::Just("x"));
    /// ```
    #[inline]
    pub fn record<K, I>(entries: I) -> Result<E, IndexMap<K, A>>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = (K, Self)>,
    {
        sequence_record(entries)
    }

    /// Calls `function` with every value when there is no `Err`.
    #[inline]
    pub fn apply_all<B, F, I>(function: F, items: I) -> Result<E, B>
    where
        F: FnOnce(Vec<A>) -> B,
        I: IntoIterator<Item = Self>,
    {
        apply_all(function, items)
    }
}

impl<E, A> Result<E, Result<E, A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn join(self) -> Result<E, A> {
        self.chain(identity)
    }
}

impl<E, F> Result<E, F> {
    /// Applies an `Ok`-held function to an `Ok`-held argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    /// use remonad::curry2;
    ///
    /// let add = Result::<&str, _>::Ok(curry2!(|a: i32, b: i32| a + b));
    /// assert_eq!(add.apply(Result::Ok(1)).apply(Result::Err("missing")), Result::Err("missing"));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Result<E, A>) -> Result<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Ok(function), Result::Ok(value)) => Result::Ok(function(value)),
            (Self::Err(error), _) | (Self::Ok(_), Result::Err(error)) => Result::Err(error),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Result<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<std::result::Result<A, E>> for Result<E, A> {
    #[inline]
    fn from(result: std::result::Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<E, A> From<Result<E, A>> for std::result::Result<A, E> {
    #[inline]
    fn from(result: Result<E, A>) -> Self {
        match result {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<E, A> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        either.to_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Result<E, A> {
    type Inner = A;
    type WithType<B> = Result<E, B>;
}

impl<E: Clone, A> Functor for Result<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error.clone()),
        }
    }
}

impl<E: Clone, A> Applicative for Result<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Result<E, B> {
        Result::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<E, B>, function: F) -> Result<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Ok(a), Result::Ok(b)) => Result::Ok(function(a, b)),
            (Self::Err(error), _) | (Self::Ok(_), Result::Err(error)) => Result::Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Result<E, B>, third: Result<E, C>, function: F) -> Result<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Ok(a), Result::Ok(b), Result::Ok(c)) => Result::Ok(function(a, b, c)),
            (Self::Err(error), _, _)
            | (Self::Ok(_), Result::Err(error), _)
            | (Self::Ok(_), Result::Ok(_), Result::Err(error)) => Result::Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<E, B>) -> Result<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        Result::apply(self, other)
    }
}

impl<E: Clone, A> Monad for Result<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<E, B>
    where
        F: FnOnce(A) -> Result<E, B>,
    {
        self.chain(function)
    }
}

impl<E, A> ShortCircuit for Result<E, A> {
    type Residual = Result<E, Infallible>;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn branch(self) -> ControlFlow<Result<E, Infallible>, A> {
        match self {
            Self::Ok(value) => ControlFlow::Continue(value),
            Self::Err(error) => ControlFlow::Break(Result::Err(error)),
        }
    }

    #[inline]
    fn from_output<B>(output: B) -> Result<E, B> {
        Result::Ok(output)
    }

    #[inline]
    fn from_residual<B>(residual: Result<E, Infallible>) -> Result<E, B> {
        match residual {
            Result::Err(error) => Result::Err(error),
        }
    }
}

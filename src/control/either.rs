//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either `Left(L)` or `Right(R)`. It is right biased:
//! `map`, `chain`, `apply` and the aggregation functions act on `Right` and
//! carry a `Left` through untouched, so `Left` is the natural slot for an
//! error or an early exit.
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::Either;
//!
//! fn checked_div(numerator: i32, denominator: i32) -> Either<String, i32> {
//!     if denominator == 0 {
//!         Either::Left("division by zero".to_string())
//!     } else {
//!         Either::Right(numerator / denominator)
//!     }
//! }
//!
//! let result = checked_div(84, 2).chain(|n| checked_div(n, 2));
//! assert_eq!(result, Either::Right(21));
//!
//! let message = checked_div(1, 0).fold(|error| error, |n| n.to_string());
//! assert_eq!(message, "division by zero");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use super::maybe::Maybe;
use super::result::Result;
use super::tuple::Tuple;
use crate::compose::identity;
use crate::typeclass::{
    Applicative, Functor, Monad, ShortCircuit, TypeConstructor, apply_all, first_success,
    sequence, sequence_record, successes,
};

/// A value that can be one of two types.
///
/// By convention `Left` represents failure or the first alternative and
/// `Right` represents success.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use remonad::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_ref(), Maybe::Just(&42));
    /// assert_eq!(left.right_ref(), Maybe::Nothing);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Converts into `Maybe<L>`, consuming the either.
    #[inline]
    pub fn get_left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Converts into `Maybe<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Either, Maybe};
    ///
    /// let right: Either<i32, &str> = Either::Right("hello");
    /// assert_eq!(right.get_right(), Maybe::Just("hello"));
    /// ```
    #[inline]
    pub fn get_right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Returns the right value, or `default` for a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present. Alias of
    /// [`Either::map_right`].
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant, keeping it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_both(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn map_both<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Feeds a right value into a function returning another `Either`.
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns `self` if it is `Right`, otherwise `other`.
    ///
    /// Between two `Left` values the receiver's is kept.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (right @ Self::Right(_), _) | (Self::Left(_), right @ Self::Right(_)) => right,
            (left @ Self::Left(_), Self::Left(_)) => left,
        }
    }

    /// Prefers `other`: `a.or_else(b) == b.or(a)`.
    #[inline]
    #[must_use]
    pub fn or_else(self, other: Self) -> Self {
        other.or(self)
    }

    /// Replaces a `Left` with `Right(value)`.
    #[inline]
    #[must_use]
    pub fn with_default(self, value: R) -> Self {
        match self {
            Self::Left(_) => Self::Right(value),
            right @ Self::Right(_) => right,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Either, Result};
    ///
    /// let left: Either<&str, i32> = Either::Left("bad");
    /// assert_eq!(left.to_result(), Result::Err("bad"));
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<L, R> {
        match self {
            Self::Left(value) => Result::Err(value),
            Self::Right(value) => Result::Ok(value),
        }
    }

    /// Converts into a pair of `Maybe`s, exactly one of which is `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Either, Maybe, Tuple};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.to_tuple(), Tuple::of(Maybe::Just(42), Maybe::Nothing));
    /// ```
    #[inline]
    pub fn to_tuple(self) -> Tuple<Maybe<L>, Maybe<R>> {
        match self {
            Self::Left(value) => Tuple::of(Maybe::Just(value), Maybe::Nothing),
            Self::Right(value) => Tuple::of(Maybe::Nothing, Maybe::Just(value)),
        }
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// `Right` of every right value, or the first `Left` by position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Either;
    ///
    /// let values: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Left("a"), Either::Left("b")];
    /// assert_eq!(Either::all(values), Either::Left("a"));
    /// ```
    #[inline]
    pub fn all<I>(items: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Self>,
    {
        sequence(items)
    }

    /// The first `Right`, otherwise the first `Left`. `None` for empty input.
    #[inline]
    pub fn some<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        first_success(items)
    }

    /// The right values, in order.
    #[inline]
    pub fn values<I>(items: I) -> Vec<R>
    where
        I: IntoIterator<Item = Self>,
    {
        successes(items)
    }

    /// Keyed version of [`Either::all`].
    #[inline]
    pub fn record<K, I>(entries: I) -> Either<L, IndexMap<K, R>>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = (K, Self)>,
    {
        sequence_record(entries)
    }

    /// Calls `function` with every right value when there is no `Left`.
    #[inline]
    pub fn apply_all<B, F, I>(function: F, items: I) -> Either<L, B>
    where
        F: FnOnce(Vec<R>) -> B,
        I: IntoIterator<Item = Self>,
    {
        apply_all(function, items)
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of right nesting.
    #[inline]
    pub fn join(self) -> Either<L, R> {
        self.chain(identity)
    }
}

impl<L, F> Either<L, F> {
    /// Applies a right-held function to a right-held argument.
    ///
    /// The receiver's `Left` wins over the argument's.
    #[inline]
    pub fn apply<A, B>(self, argument: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: std::result::Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for std::result::Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<L, B>, third: Either<L, C>, function: F) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => Either::Right(function(a, b, c)),
            (Self::Left(error), _, _)
            | (Self::Right(_), Either::Left(error), _)
            | (Self::Right(_), Either::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        Either::apply(self, other)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}

impl<L, R> ShortCircuit for Either<L, R> {
    type Residual = Either<L, Infallible>;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_right()
    }

    #[inline]
    fn branch(self) -> ControlFlow<Either<L, Infallible>, R> {
        match self {
            Self::Left(value) => ControlFlow::Break(Either::Left(value)),
            Self::Right(value) => ControlFlow::Continue(value),
        }
    }

    #[inline]
    fn from_output<B>(output: B) -> Either<L, B> {
        Either::Right(output)
    }

    #[inline]
    fn from_residual<B>(residual: Either<L, Infallible>) -> Either<L, B> {
        match residual {
            Either::Left(value) => Either::Left(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_std_result_conversion_roundtrip() {
        let ok: std::result::Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: std::result::Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: std::result::Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, Either::Left("error".to_string()));
    }

    #[rstest]
    fn test_map_does_not_touch_left() {
        let left: Either<&str, i32> = Either::Left("stop");
        let result = left.map(|_| -> i32 { panic!("must not be called") });
        assert_eq!(result, Either::Left("stop"));
    }

    #[rstest]
    #[case(Either::Right(1), Either::Right(2), Either::Right(1))]
    #[case(Either::Left("a"), Either::Right(2), Either::Right(2))]
    #[case(Either::Right(1), Either::Left("b"), Either::Right(1))]
    #[case(Either::Left("a"), Either::Left("b"), Either::Left("a"))]
    fn test_or_keeps_receiver_among_lefts(
        #[case] receiver: Either<&'static str, i32>,
        #[case] other: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        assert_eq!(receiver.or(other), expected);
        assert_eq!(other.or_else(receiver), expected);
    }

    #[rstest]
    fn test_with_default_replaces_left() {
        let left: Either<&str, i32> = Either::Left("a");
        assert_eq!(left.with_default(5), Either::Right(5));
        assert_eq!(Either::<&str, i32>::Right(1).with_default(5), Either::Right(1));
    }

    #[rstest]
    fn test_join_and_apply() {
        let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Left("inner"));
        assert_eq!(nested.join(), Either::Left("inner"));

        let function: Either<&str, fn(i32) -> i32> = Either::Right(|n| n + 1);
        assert_eq!(function.apply(Either::Right(1)), Either::Right(2));

        let missing: Either<&str, fn(i32) -> i32> = Either::Left("f");
        assert_eq!(missing.apply(Either::Left("x")), Either::Left("f"));
    }

    #[rstest]
    fn test_to_tuple_right() {
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(right.to_tuple(), Tuple::of(Maybe::Nothing, Maybe::Just("r")));
    }

    #[rstest]
    fn test_get_left_and_get_or_else() {
        let left: Either<i32, &str> = Either::Left(1);
        assert_eq!(left.get_left(), Maybe::Just(1));
        assert_eq!(left.get_or_else("fallback"), "fallback");
    }

    #[rstest]
    fn test_some_and_values() {
        let items: Vec<Either<&str, i32>> = vec![Either::Left("a"), Either::Right(2), Either::Left("b")];
        assert_eq!(Either::some(items.clone()), Some(Either::Right(2)));
        assert_eq!(Either::values(items), vec![2]);
        assert_eq!(Either::<&str, i32>::some(vec![]), None);
    }

    #[rstest]
    #[case(Either::Left("x"), "Left(x)")]
    #[case(Either::Right(3), "Right(3)")]
    fn test_display(#[case] value: Either<&'static str, i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_debug_quotes_payload() {
        let left: Either<&str, i32> = Either::Left("x");
        assert_eq!(format!("{left:?}"), "Left(\"x\")");
    }
}

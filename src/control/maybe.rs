//! Maybe type - a value that may be absent.
//!
//! `Maybe<A>` is either `Just(A)` or `Nothing`. It plays the role of
//! `Option`, with the full combinator algebra shared by every container in
//! this crate: `map`, `chain`, `apply`, `fold`, biased `or`/`or_else` and the
//! aggregation functions `all`, `some`, `values`, `record` and `apply_all`.
//!
//! # Absence at the boundary
//!
//! Rust has one absence marker where other ecosystems have two ("no value
//! given" and "value given, but null"). The two constructors make the choice
//! explicit:
//!
//! - [`Maybe::from_optional`] treats only the outer `None` as absent. A
//!   present inner `None` is a real payload.
//! - [`Maybe::from_nullable`] treats both layers as absent.
//!
//! ```rust
//! use remonad::control::Maybe;
//!
//! let nullable: Maybe<i32> = Maybe::from_nullable(Some(None));
//! assert_eq!(nullable.map(|x| x + 1).get_or_else(0), 0);
//!
//! let optional: Maybe<Option<i32>> = Maybe::from_optional(Some(None));
//! assert_eq!(optional.map(|x| x).get_or_else(Some(0)), None);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use super::either::Either;
use super::result::Result;
use crate::compose::identity;
use crate::typeclass::{
    Applicative, Functor, Monad, ShortCircuit, TypeConstructor, apply_all, first_success,
    sequence, sequence_record, successes,
};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use remonad::control::Maybe;
///
/// let name = Maybe::Just("ferris");
/// let greeting = name
///     .filter(|n| !n.is_empty())
///     .map(|n| format!("hello, {n}"))
///     .get_or_else_with(|| "hello, stranger".to_string());
/// assert_eq!(greeting, "hello, ferris");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the payload: `&Maybe<A>` becomes `Maybe<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// let text = Maybe::Just(String::from("kept"));
    /// assert_eq!(text.as_ref().map(|s| s.len()), Maybe::Just(4));
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Mapping and Sequencing
    // =========================================================================

    /// Applies `function` to a `Just` payload. `Nothing` passes through and
    /// the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(20).map(|n| n + 1), Maybe::Just(21));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|n| n + 1), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Feeds a `Just` payload into a function returning another `Maybe`.
    ///
    /// The callback's result is returned as is, so chaining never nests.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    /// assert_eq!(Maybe::Just("12").chain(parse), Maybe::Just(12));
    /// assert_eq!(Maybe::Just("x").chain(parse), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps a `Just` payload only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns `self` if it is `Just`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).or(Maybe::Just(2)), Maybe::Just(1));
    /// assert_eq!(Maybe::Nothing.or(Maybe::Just(2)), Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    /// Prefers `other`: `a.or_else(b) == b.or(a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).or_else(Maybe::Just(2)), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(1).or_else(Maybe::Nothing), Maybe::Just(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, other: Self) -> Self {
        other.or(self)
    }

    /// Replaces `Nothing` with `Just(value)`.
    ///
    /// Unlike [`get_or_else`](Maybe::get_or_else), the result stays wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// let retries: Maybe<u8> = Maybe::Nothing;
    /// assert_eq!(retries.with_default(3), Maybe::Just(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_default(self, value: A) -> Self {
        self.or(Self::Just(value))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` with one handler per variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|n| format!("got {n}"), || "none".to_string());
    /// assert_eq!(describe(Maybe::Just(3)), "got 3");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_just: F, on_nothing: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Returns the payload, or `default` for `Nothing`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the payload, or computes a fallback for `Nothing`.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// Converts to `Option`, the boundary back to plain Rust code.
    #[inline]
    pub fn get(self) -> Option<A> {
        self.into()
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// `Just(a)` becomes `Ok(a)`, `Nothing` becomes `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{Maybe, Result};
    ///
    /// assert_eq!(Maybe::Just(1).to_result("missing"), Result::Ok(1));
    /// assert_eq!(Maybe::<i32>::Nothing.to_result("missing"), Result::Err("missing"));
    /// ```
    #[inline]
    pub fn to_result<E>(self, error: E) -> Result<E, A> {
        match self {
            Self::Just(value) => Result::Ok(value),
            Self::Nothing => Result::Err(error),
        }
    }

    /// `Just(a)` becomes `Right(a)`, `Nothing` becomes `Left(left)`.
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(left),
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps an `Option`. Only the outer `None` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_optional(Some(None::<i32>)), Maybe::Just(None));
    /// assert_eq!(Maybe::<i32>::from_optional(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_optional(value: Option<A>) -> Self {
        value.into()
    }

    /// Wraps a possibly-null optional value. Both layers of `None` are absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(Some(1))), Maybe::Just(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(Some(None)), Maybe::Nothing);
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<Option<A>>) -> Self {
        value.flatten().into()
    }

    /// The element at `index`, or `Nothing` when the sequence is too short.
    #[inline]
    pub fn nth<I>(items: I, index: usize) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        items.into_iter().nth(index).into()
    }

    /// The first element, or `Nothing` for an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::first(vec![3, 4]), Maybe::Just(3));
    /// assert_eq!(Maybe::first(Vec::<i32>::new()), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn first<I>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        items.into_iter().next().into()
    }

    /// The last element, or `Nothing` for an empty sequence.
    #[inline]
    pub fn last<I>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        items.into_iter().last().into()
    }

    /// The first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::find(1..10, |n| n % 4 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::find(1..3, |n| *n > 5), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn find<I, P>(items: I, predicate: P) -> Self
    where
        I: IntoIterator<Item = A>,
        P: FnMut(&A) -> bool,
    {
        items.into_iter().find(predicate).into()
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// `Just` of every payload, or `Nothing` if any element is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::all(vec![Maybe::Just(1), Maybe::Just(2)]), Maybe::Just(vec![1, 2]));
    /// assert_eq!(Maybe::all(vec![Maybe::Just(1), Maybe::Nothing]), Maybe::Nothing);
    /// assert_eq!(Maybe::<i32>::all(vec![]), Maybe::Just(vec![]));
    /// ```
    #[inline]
    pub fn all<I>(items: I) -> Maybe<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        sequence(items)
    }

    /// The first `Just`, or `Nothing` when there is none (including an empty
    /// input).
    #[inline]
    pub fn some<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        first_success(items).unwrap_or(Self::Nothing)
    }

    /// Payloads of the `Just` elements, in order.
    #[inline]
    pub fn values<I>(items: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        successes(items)
    }

    /// Keyed version of [`Maybe::all`]; key order is preserved.
    #[inline]
    pub fn record<K, I>(entries: I) -> Maybe<IndexMap<K, A>>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = (K, Self)>,
    {
        sequence_record(entries)
    }

    /// Calls `function` with every payload when all elements are `Just`.
    #[inline]
    pub fn apply_all<B, F, I>(function: F, items: I) -> Maybe<B>
    where
        F: FnOnce(Vec<A>) -> B,
        I: IntoIterator<Item = Self>,
    {
        apply_all(function, items)
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn join(self) -> Maybe<A> {
        self.chain(identity)
    }
}

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// Multi-argument functions are curried first and applied one argument
    /// at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::curry2;
    ///
    /// let add = Maybe::Just(curry2!(|a: i32, b: i32| a + b));
    /// assert_eq!(add.apply(Maybe::Just(1)).apply(Maybe::Just(2)), Maybe::Just(3));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Self::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl Maybe<f64> {
    /// `Nothing` for NaN, `Just` for every other number including infinities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_number(1.5), Maybe::Just(1.5));
    /// assert!(Maybe::from_number(f64::NAN).is_nothing());
    /// assert!(Maybe::from_number(f64::INFINITY).is_just());
    /// ```
    #[inline]
    pub fn from_number(value: f64) -> Self {
        if value.is_nan() {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    /// `Just` only for finite numbers.
    #[inline]
    pub fn from_finite(value: f64) -> Self {
        if value.is_finite() {
            Self::Just(value)
        } else {
            Self::Nothing
        }
    }
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}

impl<A> ShortCircuit for Maybe<A> {
    type Residual = Maybe<Infallible>;

    #[inline]
    fn is_success(&self) -> bool {
        self.is_just()
    }

    #[inline]
    fn branch(self) -> ControlFlow<Maybe<Infallible>, A> {
        match self {
            Self::Just(value) => ControlFlow::Continue(value),
            Self::Nothing => ControlFlow::Break(Maybe::Nothing),
        }
    }

    #[inline]
    fn from_output<B>(output: B) -> Maybe<B> {
        Maybe::Just(output)
    }

    #[inline]
    fn from_residual<B>(residual: Maybe<Infallible>) -> Maybe<B> {
        match residual {
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

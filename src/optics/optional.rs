//! Optional optics: a focus that may be absent.
//!
//! An Optional sits between a [`Lens`] and a [`Prism`]: reading may find
//! nothing, and writing only takes effect when the focus is present.
//! Composing a lens with a prism yields one.
//!
//! # Laws
//!
//! 1. **GetSet**: if `get_option(&s)` is `Just(a)`, `set(s, a.clone()) == s`
//! 2. **SetGet**: `get_option(&set(s, b))` is `get_option(&s).map(|_| &b)`
//!
//! # Examples
//!
//! ```
//! use remonad::control::Maybe;
//! use remonad::optics::{Lens, Optional};
//! use remonad::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { nickname: Maybe<String> }
//!
//! let nickname = lens!(Profile, nickname).compose_prism(prism!(Maybe<String>, Just));
//!
//! let named = Profile { nickname: Maybe::Just("ada".to_string()) };
//! let anonymous = Profile { nickname: Maybe::Nothing };
//!
//! assert_eq!(nickname.get_option(&named), Maybe::Just(&"ada".to_string()));
//! assert_eq!(nickname.set(anonymous.clone(), "bob".to_string()), anonymous);
//! ```

use std::marker::PhantomData;

use crate::control::Maybe;

use super::lens::Lens;
use super::prism::Prism;

/// A getter that may miss, with a setter that only writes a present focus.
pub trait Optional<S, A> {
    /// Borrows the focus if present.
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a A>;

    /// Replaces the focus if present; otherwise returns `source` unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Transforms the focus if present.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).map(A::clone) {
            Maybe::Just(value) => self.set(source, function(value)),
            Maybe::Nothing => source,
        }
    }

    /// Reports whether the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_just()
    }

    /// Focuses deeper with another optional.
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }
}

/// An optional built from closures.
///
/// # Examples
///
/// ```
/// use remonad::control::Maybe;
/// use remonad::optics::{FunctionOptional, Optional};
///
/// let head = FunctionOptional::new(
///     |items: &Vec<i32>| Maybe::first(items),
///     |mut items: Vec<i32>, value| {
///         if let Some(slot) = items.first_mut() {
///             *slot = value;
///         }
///         items
///     },
/// );
///
/// assert_eq!(head.modify(vec![1, 2], |n| n * 10), vec![10, 2]);
/// assert_eq!(head.get_option(&Vec::new()), Maybe::Nothing);
/// ```
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Maybe<&A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Maybe<&A>,
    St: Fn(S, A) -> S,
{
    /// Creates an optional from its getter and setter.
    ///
    /// The setter is only invoked when the getter finds a focus.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Maybe<&A>,
    St: Fn(S, A) -> S,
{
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.is_present(&source) {
            (self.setter)(source, value)
        } else {
            source
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Maybe<&A> + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Maybe<&A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// A lens followed by a prism; see [`Lens::compose_prism`].
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Chains `lens` and `prism`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
    A: 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a B> {
        self.prism.get_option(self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        if self.is_present(&source) {
            self.lens.set(source, self.prism.reverse_get(value))
        } else {
            source
        }
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone(), self.prism.clone())
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// A prism seen as an optional; see [`Prism::to_optional`].
pub struct PrismAsOptional<P, S, A> {
    prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsOptional<P, S, A> {
    /// Wraps `prism`.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P, S, A> Optional<S, A> for PrismAsOptional<P, S, A>
where
    P: Prism<S, A>,
{
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a A> {
        self.prism.get_option(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.is_present(&source) {
            self.prism.reverse_get(value)
        } else {
            source
        }
    }
}

impl<P: Clone, S, A> Clone for PrismAsOptional<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsOptional<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsOptional")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Two optionals chained: `S -> A -> B`.
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
    A: Clone + 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a B> {
        self.first
            .get_option(source)
            .chain(|intermediate| self.second.get_option(intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source).map(A::clone) {
            Maybe::Just(intermediate) => {
                let updated = self.second.set(intermediate, value);
                self.first.set(source, updated)
            }
            Maybe::Nothing => source,
        }
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

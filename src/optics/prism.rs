//! Prism optics for focusing on one variant of an enum.
//!
//! Unlike a [`Lens`](super::Lens), a Prism may find nothing: the lookup
//! returns [`Maybe`], and is [`Nothing`](Maybe::Nothing) when the source is
//! another variant.
//!
//! # Laws
//!
//! 1. **ReverseGetGet**: `prism.get_option(&prism.reverse_get(value)) == Just(&value)`
//! 2. **GetReverseGet**: if `prism.get_option(&source)` is `Just(value)`,
//!    then `prism.reverse_get(value.clone()) == source`
//!
//! # Examples
//!
//! ```
//! use remonad::control::Maybe;
//! use remonad::optics::Prism;
//! use remonad::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.get_option(&Shape::Circle(2.0)), Maybe::Just(&2.0));
//! assert_eq!(circle.get_option(&Shape::Square(2.0)), Maybe::Nothing);
//! assert_eq!(circle.reverse_get(1.5), Shape::Circle(1.5));
//! ```

use std::marker::PhantomData;

use crate::control::Maybe;

use super::optional::PrismAsOptional;

/// A partial getter paired with a total constructor.
pub trait Prism<S, A> {
    /// Borrows the focus when `source` is the matching variant.
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a A>;

    /// Builds an `S` from the focus.
    fn reverse_get(&self, value: A) -> S;

    /// Moves the focus out when `source` is the matching variant.
    fn get_option_owned(&self, source: S) -> Maybe<A>;

    /// Rebuilds the source with a transformed focus, or yields
    /// [`Nothing`](Maybe::Nothing) when the variant does not match.
    fn modify_option<F>(&self, source: S, function: F) -> Maybe<S>
    where
        F: FnOnce(A) -> A,
    {
        self.get_option_owned(source)
            .map(|value| self.reverse_get(function(value)))
    }

    /// Transforms the focus, returning `source` unchanged when the variant
    /// does not match.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).map(A::clone) {
            Maybe::Just(value) => self.reverse_get(function(value)),
            Maybe::Nothing => source,
        }
    }

    /// Focuses on a variant nested inside this one.
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Views this prism as an [`Optional`](super::Optional).
    fn to_optional(self) -> PrismAsOptional<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsOptional::new(self)
    }

    /// Views this prism as a traversal with zero or one target.
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }
}

/// A prism built from closures; see [`prism!`](crate::prism).
pub struct FunctionPrism<S, A, G, R, O>
where
    G: Fn(&S) -> Maybe<&A>,
    R: Fn(A) -> S,
    O: Fn(S) -> Maybe<A>,
{
    get_option_function: G,
    reverse_get_function: R,
    get_option_owned_function: O,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, R, O> FunctionPrism<S, A, G, R, O>
where
    G: Fn(&S) -> Maybe<&A>,
    R: Fn(A) -> S,
    O: Fn(S) -> Maybe<A>,
{
    /// Creates a prism from a borrowing matcher, a constructor and an owning
    /// matcher.
    #[must_use]
    pub const fn new(
        get_option_function: G,
        reverse_get_function: R,
        get_option_owned_function: O,
    ) -> Self {
        Self {
            get_option_function,
            reverse_get_function,
            get_option_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, R, O> Prism<S, A> for FunctionPrism<S, A, G, R, O>
where
    G: Fn(&S) -> Maybe<&A>,
    R: Fn(A) -> S,
    O: Fn(S) -> Maybe<A>,
{
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a A> {
        (self.get_option_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }

    fn get_option_owned(&self, source: S) -> Maybe<A> {
        (self.get_option_owned_function)(source)
    }
}

impl<S, A, G, R, O> Clone for FunctionPrism<S, A, G, R, O>
where
    G: Fn(&S) -> Maybe<&A> + Clone,
    R: Fn(A) -> S + Clone,
    O: Fn(S) -> Maybe<A> + Clone,
{
    fn clone(&self) -> Self {
        Self::new(
            self.get_option_function.clone(),
            self.reverse_get_function.clone(),
            self.get_option_owned_function.clone(),
        )
    }
}

impl<S, A, G, R, O> std::fmt::Debug for FunctionPrism<S, A, G, R, O>
where
    G: Fn(&S) -> Maybe<&A>,
    R: Fn(A) -> S,
    O: Fn(S) -> Maybe<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// Two prisms chained: `S -> A -> B`.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
    A: 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Maybe<&'a B> {
        self.first
            .get_option(source)
            .chain(|intermediate| self.second.get_option(intermediate))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }

    fn get_option_owned(&self, source: S) -> Maybe<B> {
        self.first
            .get_option_owned(source)
            .chain(|intermediate| self.second.get_option_owned(intermediate))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism seen as a [`Traversal`](super::Traversal) with at most one target.
pub struct PrismAsTraversal<P, S, A> {
    pub(crate) prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Wraps `prism`.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.prism.clone())
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsTraversal<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsTraversal")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Builds a [`FunctionPrism`] for a single-field tuple variant.
///
/// Accepts a plain enum, a generic enum (`Slot<i32>`) or a path.
///
/// # Examples
///
/// ```
/// use remonad::control::{Maybe, Result};
/// use remonad::optics::Prism;
/// use remonad::prism;
///
/// let ok = prism!(Result<String, i32>, Ok);
/// assert_eq!(ok.get_option(&Result::Ok(3)), Maybe::Just(&3));
/// assert_eq!(ok.modify(Result::Err("e".to_string()), |n| n + 1), Result::Err("e".to_string()));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                $enum_type::$variant(ref value) => $crate::control::Maybe::Just(value),
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::control::Maybe::Just(value),
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match *source {
                $enum_type::$variant(ref value) => $crate::control::Maybe::Just(value),
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::control::Maybe::Just(value),
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                <$enum_type>::$variant(ref value) => $crate::control::Maybe::Just(value),
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
            |value| <$enum_type>::$variant(value),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => $crate::control::Maybe::Just(value),
                #[allow(unreachable_patterns)]
                _ => $crate::control::Maybe::Nothing,
            },
        )
    };
}

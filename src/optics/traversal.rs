//! Traversal optics: zero or more targets inside a structure.
//!
//! A Traversal generalizes [`Lens`] (exactly one target) and [`Prism`]
//! (at most one). Targets are visited in structure order, and
//! [`Traversal::modify`] rewrites every one of them.
//!
//! # Examples
//!
//! ```
//! use remonad::control::Maybe;
//! use remonad::optics::{Traversal, VecTraversal};
//!
//! let scores = VecTraversal::<Maybe<u32>>::new().some();
//! let source = vec![Maybe::Just(3), Maybe::Nothing, Maybe::Just(5)];
//!
//! assert_eq!(scores.get_all(&source).copied().collect::<Vec<_>>(), vec![3, 5]);
//! assert_eq!(
//!     scores.modify(source, |score| score * 10),
//!     vec![Maybe::Just(30), Maybe::Nothing, Maybe::Just(50)]
//! );
//! ```

use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::control::Maybe;

use super::lens::{Lens, LensAsTraversal};
use super::prism::{Prism, PrismAsTraversal};

/// Read and rewrite access to every target of type `A` inside an `S`.
pub trait Traversal<S, A> {
    /// Borrows every target, in order.
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a>;

    /// Moves every target out, in order.
    fn get_all_owned(&self, source: S) -> Vec<A>;

    /// Applies `function` to every target.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Overwrites every target with `value`.
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Folds the targets from the left.
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.get_all(source).fold(initial, function)
    }

    /// Counts the targets.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).count()
    }

    /// Whether any target satisfies `predicate`.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).any(predicate)
    }

    /// Whether every target satisfies `predicate`; true when there are none.
    fn for_all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).all(predicate)
    }

    /// The first target, if any.
    fn head_option<'a>(&self, source: &'a S) -> Maybe<&'a A> {
        self.get_all(source).next().into()
    }

    /// Visits the targets of `other` inside each target of this traversal.
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Narrows a traversal of [`Maybe`] targets to the values inside the
    /// `Just` ones. `Nothing` targets are skipped and left untouched.
    fn some<B>(self) -> JustTraversal<Self, B>
    where
        Self: Sized + Traversal<S, Maybe<B>>,
    {
        JustTraversal::new(self)
    }
}

/// Every element of a `Vec`.
pub struct VecTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> VecTraversal<A> {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

impl<A: 'static> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all<'a>(&self, source: &'a Vec<A>) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        Box::new(source.iter())
    }

    fn get_all_owned(&self, source: Vec<A>) -> Vec<A> {
        source
    }

    fn modify<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }
}

/// The value of a [`Maybe`], when present.
pub struct MaybeTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> MaybeTraversal<A> {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for MaybeTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for MaybeTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for MaybeTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("MaybeTraversal").finish()
    }
}

impl<A: 'static> Traversal<Maybe<A>, A> for MaybeTraversal<A> {
    fn get_all<'a>(&self, source: &'a Maybe<A>) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        Box::new(source.as_ref().get().into_iter())
    }

    fn get_all_owned(&self, source: Maybe<A>) -> Vec<A> {
        source.get().into_iter().collect()
    }

    fn modify<F>(&self, source: Maybe<A>, function: F) -> Maybe<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }
}

/// Every value of an [`IndexMap`], in insertion order.
///
/// This is the shape produced by the containers' `record` aggregation.
pub struct RecordTraversal<K, A> {
    _marker: PhantomData<(K, A)>,
}

impl<K, A> RecordTraversal<K, A> {
    /// Creates the traversal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, A> Default for RecordTraversal<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A> Clone for RecordTraversal<K, A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, A> std::fmt::Debug for RecordTraversal<K, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("RecordTraversal").finish()
    }
}

impl<K, A> Traversal<IndexMap<K, A>, A> for RecordTraversal<K, A>
where
    K: Hash + Eq + 'static,
    A: 'static,
{
    fn get_all<'a>(&self, source: &'a IndexMap<K, A>) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        Box::new(source.values())
    }

    fn get_all_owned(&self, source: IndexMap<K, A>) -> Vec<A> {
        source.into_values().collect()
    }

    fn modify<F>(&self, source: IndexMap<K, A>, mut function: F) -> IndexMap<K, A>
    where
        F: FnMut(A) -> A,
    {
        source
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

/// Two traversals chained: every `B` inside every `A` inside `S`.
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
    A: 'static,
    B: 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a B> + 'a> {
        let targets: Vec<&'a B> = self
            .first
            .get_all(source)
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect();
        Box::new(targets.into_iter())
    }

    fn get_all_owned(&self, source: S) -> Vec<B> {
        self.first
            .get_all_owned(source)
            .into_iter()
            .flat_map(|intermediate| self.second.get_all_owned(intermediate))
            .collect()
    }

    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.modify(source, |intermediate| {
            self.second.modify(intermediate, &mut function)
        })
    }
}

/// The `Just` values of a traversal over [`Maybe`]; see [`Traversal::some`].
pub struct JustTraversal<T, B> {
    inner: T,
    _marker: PhantomData<B>,
}

impl<T, B> JustTraversal<T, B> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T: Clone, B> Clone for JustTraversal<T, B> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: std::fmt::Debug, B> std::fmt::Debug for JustTraversal<T, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("JustTraversal")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S, B, T> Traversal<S, B> for JustTraversal<T, B>
where
    T: Traversal<S, Maybe<B>>,
    B: 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a B> + 'a> {
        Box::new(
            self.inner
                .get_all(source)
                .filter_map(|candidate| candidate.as_ref().get()),
        )
    }

    fn get_all_owned(&self, source: S) -> Vec<B> {
        self.inner
            .get_all_owned(source)
            .into_iter()
            .filter_map(Maybe::get)
            .collect()
    }

    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.inner
            .modify(source, |candidate| candidate.map(&mut function))
    }
}

impl<L, S, A> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
    A: Clone + 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        Box::new(std::iter::once(self.lens.get(source)))
    }

    fn get_all_owned(&self, source: S) -> Vec<A> {
        vec![self.lens.get(&source).clone()]
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.lens.modify(source, function)
    }

    fn length(&self, _source: &S) -> usize {
        1
    }
}

impl<P, S, A> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
    A: Clone + 'static,
{
    fn get_all<'a>(&self, source: &'a S) -> Box<dyn Iterator<Item = &'a A> + 'a> {
        Box::new(self.prism.get_option(source).get().into_iter())
    }

    fn get_all_owned(&self, source: S) -> Vec<A> {
        self.prism.get_option_owned(source).get().into_iter().collect()
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.prism.modify(source, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::{lens, prism};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Order {
        lines: Vec<Line>,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Line {
        quantity: u32,
        discount: Maybe<u32>,
    }

    fn line(quantity: u32, discount: Maybe<u32>) -> Line {
        Line { quantity, discount }
    }

    fn order() -> Order {
        Order {
            lines: vec![
                line(2, Maybe::Just(10)),
                line(1, Maybe::Nothing),
                line(5, Maybe::Just(25)),
            ],
        }
    }

    #[rstest]
    fn test_composed_traversal_reaches_every_line() {
        let quantities = lens!(Order, lines)
            .to_traversal()
            .compose(VecTraversal::new())
            .compose(lens!(Line, quantity).to_traversal());

        assert_eq!(quantities.get_all_owned(order()), vec![2, 1, 5]);
        assert_eq!(quantities.fold(&order(), 0_u32, |total, n| total + n), 8);

        let doubled = quantities.modify(order(), |n| n * 2);
        assert_eq!(quantities.get_all_owned(doubled), vec![4, 2, 10]);
    }

    #[rstest]
    fn test_some_skips_nothing() {
        let discounts = lens!(Order, lines)
            .to_traversal()
            .compose(VecTraversal::new())
            .compose(lens!(Line, discount).to_traversal())
            .some();

        assert_eq!(discounts.length(&order()), 2);
        assert_eq!(discounts.head_option(&order()), Maybe::Just(&10));

        let capped = discounts.modify(order(), |d| d.min(20));
        assert_eq!(
            capped.lines.iter().map(|l| l.discount).collect::<Vec<_>>(),
            vec![Maybe::Just(10), Maybe::Nothing, Maybe::Just(20)]
        );
    }

    #[rstest]
    #[case(Maybe::Just(3), vec![3])]
    #[case(Maybe::Nothing, vec![])]
    fn test_maybe_traversal(#[case] source: Maybe<i32>, #[case] expected: Vec<i32>) {
        let traversal = MaybeTraversal::new();
        assert_eq!(traversal.get_all(&source).copied().collect::<Vec<_>>(), expected);
        assert_eq!(traversal.get_all_owned(source), expected);
    }

    #[rstest]
    fn test_record_traversal_keeps_keys_and_order() {
        let record: IndexMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        let incremented = RecordTraversal::new().modify(record, |n| n + 1);

        assert_eq!(
            incremented.into_iter().collect::<Vec<_>>(),
            vec![("b", 3), ("a", 2)]
        );
    }

    #[rstest]
    fn test_prism_as_traversal() {
        let rights = VecTraversal::<Either<String, i32>>::new().compose(prism!(Either<String, i32>, Right).to_traversal());
        let source = vec![Either::Right(1), Either::Left("x".to_string()), Either::Right(3)];

        assert!(rights.for_all(&source, |n| *n > 0));
        assert!(!rights.exists(&source, |n| *n > 5));
        assert_eq!(
            rights.set_all(source, 0),
            vec![Either::Right(0), Either::Left("x".to_string()), Either::Right(0)]
        );
    }

    #[rstest]
    fn test_empty_source() {
        let traversal = VecTraversal::<u8>::new();
        assert_eq!(traversal.head_option(&Vec::new()), Maybe::Nothing);
        assert!(traversal.for_all(&Vec::new(), |_| false));
    }
}

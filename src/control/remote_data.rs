//! RemoteData type - the lifecycle of a remote fetch.
//!
//! `RemoteData<E, A>` has four states: `StandBy` (not started), `Loading`
//! (in flight), `Success(A)` and `Failure(E)`. The usual progression is
//! StandBy, then Loading, then Success or Failure, but any state can be
//! built directly and nothing checks transitions.
//!
//! `StandBy` and `Loading` are inert for the combinators: `map`, `chain`
//! and `map_error` pass them through without calling their callback.
//! Aggregation stops at the first state that is not `Success` and returns
//! that exact state:
//!
//! ```rust
//! use remonad::control::RemoteData;
//!
//! let states: Vec<RemoteData<&str, i32>> =
//!     vec![RemoteData::Loading, RemoteData::Failure("e"), RemoteData::StandBy];
//! assert_eq!(RemoteData::all(states), RemoteData::Loading);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use indexmap::IndexMap;

use super::maybe::Maybe;
use super::result::Result;
use crate::compose::identity;
use crate::typeclass::{
    Applicative, Functor, Monad, ShortCircuit, TypeConstructor, apply_all, first_success,
    sequence, sequence_record, successes,
};

/// The state of a value that is fetched from somewhere else.
///
/// # Examples
///
/// ```rust
/// use remonad::control::RemoteData;
///
/// fn render(state: RemoteData<String, u32>) -> String {
///     state.fold(
///         || "idle".to_string(),
///         || "spinner".to_string(),
///         |count| format!("{count} items"),
///         |error| format!("error: {error}"),
///     )
/// }
///
/// assert_eq!(render(RemoteData::Loading), "spinner");
/// assert_eq!(render(RemoteData::Success(3)), "3 items");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemoteData<E, A> {
    /// Nothing requested yet.
    StandBy,
    /// A request is in flight.
    Loading,
    /// The request succeeded.
    Success(A),
    /// The request failed.
    Failure(E),
}

impl<E, A> RemoteData<E, A> {
    /// Returns `true` for `StandBy`.
    #[inline]
    pub const fn is_stand_by(&self) -> bool {
        matches!(self, Self::StandBy)
    }

    /// Returns `true` for `Loading`.
    #[inline]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Re-types a state that holds no success payload.
    ///
    /// Returns the payload back as `Err` for `Success`.
    #[inline]
    fn without_data<B>(self) -> std::result::Result<RemoteData<E, B>, A> {
        match self {
            Self::StandBy => Ok(RemoteData::StandBy),
            Self::Loading => Ok(RemoteData::Loading),
            Self::Failure(error) => Ok(RemoteData::Failure(error)),
            Self::Success(value) => Err(value),
        }
    }

    // =========================================================================
    // Mapping and Sequencing
    // =========================================================================

    /// Transforms a `Success` payload.
    #[inline]
    pub fn map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self.without_data() {
            Ok(state) => state,
            Err(value) => RemoteData::Success(function(value)),
        }
    }

    /// Transforms a `Failure` payload.
    #[inline]
    pub fn map_error<T, F>(self, function: F) -> RemoteData<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::StandBy => RemoteData::StandBy,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(value),
            Self::Failure(error) => RemoteData::Failure(function(error)),
        }
    }

    /// Feeds a `Success` payload into a function returning another state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::RemoteData;
    ///
    /// let loaded: RemoteData<&str, i32> = RemoteData::Success(2);
    /// assert_eq!(loaded.chain(|n| RemoteData::Success(n * 10)), RemoteData::Success(20));
    ///
    /// let loading: RemoteData<&str, i32> = RemoteData::Loading;
    /// assert_eq!(loading.chain(|n| RemoteData::Success(n * 10)), RemoteData::Loading);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        match self.without_data() {
            Ok(state) => state,
            Err(value) => function(value),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// `self` if it is `Success`, else `other` if that is `Success`, else
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::RemoteData;
    ///
    /// let loading: RemoteData<(), i32> = RemoteData::Loading;
    /// assert_eq!(loading.or(RemoteData::StandBy), RemoteData::Loading);
    /// assert_eq!(loading.or(RemoteData::Success(1)), RemoteData::Success(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (success @ Self::Success(_), _) | (_, success @ Self::Success(_)) => success,
            (receiver, _) => receiver,
        }
    }

    /// Prefers `other`: `a.or_else(b) == b.or(a)`.
    #[inline]
    #[must_use]
    pub fn or_else(self, other: Self) -> Self {
        other.or(self)
    }

    /// Every state other than `Success` becomes `Success(value)`.
    #[inline]
    #[must_use]
    pub fn with_default(self, value: A) -> Self {
        match self {
            success @ Self::Success(_) => success,
            Self::StandBy | Self::Loading | Self::Failure(_) => Self::Success(value),
        }
    }

    // =========================================================================
    // Elimination and Conversion
    // =========================================================================

    /// Eliminates the state with one handler per variant.
    #[inline]
    pub fn fold<T, S, L, F, G>(self, on_stand_by: S, on_loading: L, on_success: F, on_failure: G) -> T
    where
        S: FnOnce() -> T,
        L: FnOnce() -> T,
        F: FnOnce(A) -> T,
        G: FnOnce(E) -> T,
    {
        match self {
            Self::StandBy => on_stand_by(),
            Self::Loading => on_loading(),
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// The `Success` payload, or `default` for any other state.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// The `Success` payload as a `Maybe`.
    #[inline]
    pub fn get_data(self) -> Maybe<A> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// The `Failure` payload as a `Maybe`.
    #[inline]
    pub fn get_error(self) -> Maybe<E> {
        match self {
            Self::Failure(error) => Maybe::Just(error),
            _ => Maybe::Nothing,
        }
    }

    /// Same as [`RemoteData::get_data`].
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        self.get_data()
    }

    /// `Ok` becomes `Success`, `Err` becomes `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::{RemoteData, Result};
    ///
    /// let failed: Result<&str, i32> = Result::Err("timeout");
    /// assert_eq!(RemoteData::from_result(failed), RemoteData::Failure("timeout"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<E, A>) -> Self {
        result.fold(Self::Success, Self::Failure)
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// `Success` of every payload, or the first state that is not `Success`.
    #[inline]
    pub fn all<I>(items: I) -> RemoteData<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        sequence(items)
    }

    /// The first `Success`, otherwise the first state seen. `None` for empty
    /// input.
    #[inline]
    pub fn some<I>(items: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        first_success(items)
    }

    /// The `Success` payloads, in order.
    #[inline]
    pub fn values<I>(items: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        successes(items)
    }

    /// Keyed version of [`RemoteData::all`]; key order is preserved.
    #[inline]
    pub fn record<K, I>(entries: I) -> RemoteData<E, IndexMap<K, A>>
    where
        K: Hash + Eq,
        I: IntoIterator<Item = (K, Self)>,
    {
        sequence_record(entries)
    }

    /// Calls `function` with every payload when all states are `Success`.
    #[inline]
    pub fn apply_all<B, F, I>(function: F, items: I) -> RemoteData<E, B>
    where
        F: FnOnce(Vec<A>) -> B,
        I: IntoIterator<Item = Self>,
    {
        apply_all(function, items)
    }
}

impl<E, A> RemoteData<E, RemoteData<E, A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn join(self) -> RemoteData<E, A> {
        self.chain(identity)
    }
}

impl<E, F> RemoteData<E, F> {
    /// Applies a `Success`-held function to a `Success`-held argument.
    ///
    /// When neither is `Success`, the receiver's state wins.
    #[inline]
    pub fn apply<A, B>(self, argument: RemoteData<E, A>) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self.without_data() {
            Ok(state) => state,
            Err(function) => argument.map(function),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E: fmt::Display, A: fmt::Display> fmt::Display for RemoteData<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StandBy => write!(formatter, "StandBy"),
            Self::Loading => write!(formatter, "Loading"),
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

impl<E, A> From<Result<E, A>> for RemoteData<E, A> {
    #[inline]
    fn from(result: Result<E, A>) -> Self {
        Self::from_result(result)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for RemoteData<E, A> {
    type Inner = A;
    type WithType<B> = RemoteData<E, B>;
}

impl<E: Clone, A> Functor for RemoteData<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::StandBy => RemoteData::StandBy,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(function(value)),
            Self::Failure(error) => RemoteData::Failure(error.clone()),
        }
    }
}

impl<E: Clone, A> Applicative for RemoteData<E, A> {
    #[inline]
    fn pure<B>(value: B) -> RemoteData<E, B> {
        RemoteData::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: RemoteData<E, B>, function: F) -> RemoteData<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(|a| |b| function(a, b)).apply(other)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: RemoteData<E, B>,
        third: RemoteData<E, C>,
        function: F,
    ) -> RemoteData<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.map(|a| |b| |c| function(a, b, c))
            .apply(second)
            .apply(third)
    }

    #[inline]
    fn apply<B, Output>(self, other: RemoteData<E, B>) -> RemoteData<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        RemoteData::apply(self, other)
    }
}

impl<E: Clone, A> Monad for RemoteData<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.chain(function)
    }
}

impl<E, A> ShortCircuit for RemoteData<E, A> {
    type Residual = RemoteData<E, Infallible>;

    #[inline]
    fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    fn branch(self) -> ControlFlow<RemoteData<E, Infallible>, A> {
        match self.without_data() {
            Ok(state) => ControlFlow::Break(state),
            Err(value) => ControlFlow::Continue(value),
        }
    }

    #[inline]
    fn from_output<B>(output: B) -> RemoteData<E, B> {
        RemoteData::Success(output)
    }

    #[inline]
    fn from_residual<B>(residual: RemoteData<E, Infallible>) -> RemoteData<E, B> {
        match residual {
            RemoteData::StandBy => RemoteData::StandBy,
            RemoteData::Loading => RemoteData::Loading,
            RemoteData::Failure(error) => RemoteData::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type State = RemoteData<&'static str, i32>;

    #[rstest]
    #[case(RemoteData::StandBy)]
    #[case(RemoteData::Loading)]
    fn test_inert_states_skip_callbacks(#[case] state: State) {
        assert_eq!(state.map(|_| -> i32 { panic!("map called") }), state);
        assert_eq!(state.chain(|_| -> State { panic!("chain called") }), state);
        assert_eq!(state.map_error(|_| -> &'static str { panic!("map_error called") }), state);
    }

    #[rstest]
    #[case(RemoteData::Success(1), RemoteData::Loading, RemoteData::Success(1))]
    #[case(RemoteData::Loading, RemoteData::Success(2), RemoteData::Success(2))]
    #[case(RemoteData::Loading, RemoteData::StandBy, RemoteData::Loading)]
    #[case(RemoteData::StandBy, RemoteData::Failure("e"), RemoteData::StandBy)]
    #[case(RemoteData::Failure("e"), RemoteData::Loading, RemoteData::Failure("e"))]
    fn test_or_receiver_wins_among_non_success(
        #[case] receiver: State,
        #[case] other: State,
        #[case] expected: State,
    ) {
        assert_eq!(receiver.or(other), expected);
        assert_eq!(other.or_else(receiver), expected);
    }

    #[rstest]
    #[case(RemoteData::StandBy)]
    #[case(RemoteData::Loading)]
    #[case(RemoteData::Failure("e"))]
    fn test_with_default_replaces_every_non_success(#[case] state: State) {
        assert_eq!(state.with_default(7), RemoteData::Success(7));
    }

    #[rstest]
    fn test_accessors() {
        let failure: State = RemoteData::Failure("e");
        assert_eq!(failure.get_error(), Maybe::Just("e"));
        assert_eq!(failure.get_data(), Maybe::Nothing);
        assert_eq!(RemoteData::<&str, i32>::Success(1).to_maybe(), Maybe::Just(1));
        assert_eq!(failure.get_or_else(0), 0);
    }

    #[rstest]
    fn test_from_result_via_into() {
        let state: State = Result::Ok(5).into();
        assert_eq!(state, RemoteData::Success(5));
    }

    #[rstest]
    fn test_apply_keeps_receiver_state() {
        let function: RemoteData<&str, fn(i32) -> i32> = RemoteData::StandBy;
        assert_eq!(function.apply(RemoteData::Failure("x")), RemoteData::StandBy);

        let ready: RemoteData<&str, fn(i32) -> i32> = RemoteData::Success(|n| n + 1);
        assert_eq!(ready.apply(RemoteData::Loading), RemoteData::Loading);
        assert_eq!(ready.apply(RemoteData::Success(1)), RemoteData::Success(2));
    }

    #[rstest]
    fn test_join() {
        let nested: RemoteData<&str, State> = RemoteData::Success(RemoteData::Loading);
        assert_eq!(nested.join(), RemoteData::Loading);
    }

    #[rstest]
    fn test_all_first_non_success_by_position() {
        assert_eq!(
            RemoteData::all(vec![
                RemoteData::Success(1),
                RemoteData::Failure("e"),
                RemoteData::Loading,
            ]),
            RemoteData::Failure("e")
        );
        assert_eq!(RemoteData::<&str, i32>::all(vec![]), RemoteData::Success(vec![]));
    }

    #[rstest]
    fn test_record_stops_at_stand_by() {
        let record = RemoteData::record(vec![
            ("a", RemoteData::<&str, i32>::Success(1)),
            ("b", RemoteData::StandBy),
        ]);
        assert!(record.is_stand_by());
    }

    #[rstest]
    #[case(RemoteData::StandBy, "StandBy")]
    #[case(RemoteData::Loading, "Loading")]
    #[case(RemoteData::Success(3), "Success(3)")]
    #[case(RemoteData::Failure("e"), "Failure(e)")]
    fn test_display(#[case] state: State, #[case] expected: &str) {
        assert_eq!(state.to_string(), expected);
    }
}

//! Lens optics for focusing on a field of a structure.
//!
//! A Lens always succeeds: every `S` has exactly one `A` inside it.
//!
//! # Laws
//!
//! 1. **GetSet**: setting what you got changes nothing.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **SetGet**: you get back what you set.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **SetSet**: the second set wins.
//!    ```text
//!    lens.set(lens.set(source, a), b) == lens.set(source, b)
//!    ```
//!
//! # Examples
//!
//! ```
//! use remonad::lens;
//! use remonad::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, address: Address }
//!
//! let city = lens!(User, address).compose(lens!(Address, city));
//!
//! let user = User {
//!     name: "Ada".to_string(),
//!     address: Address { city: "London".to_string() },
//! };
//!
//! assert_eq!(city.get(&user), "London");
//! let moved = city.modify(user, |name| name.to_uppercase());
//! assert_eq!(moved.address.city, "LONDON");
//! ```

use std::marker::PhantomData;

use super::optional::LensPrismComposition;
use super::prism::Prism;

/// A total getter/setter pair focusing on one `A` inside an `S`.
pub trait Lens<S, A> {
    /// Borrows the focused value.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to look into
    ///
    /// # Returns
    ///
    /// A reference to the focused field
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused value, returning the updated structure.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to update (consumed)
    /// * `value` - The new value for the focused field
    ///
    /// # Returns
    ///
    /// `source` with only the focused field replaced
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to the focused value.
    ///
    /// # Examples
    ///
    /// ```
    /// use remonad::control::Maybe;
    /// use remonad::lens;
    /// use remonad::optics::Lens;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Account { owner: String, balance: Maybe<i64> }
    ///
    /// let balance = lens!(Account, balance);
    /// let account = Account { owner: "ada".to_string(), balance: Maybe::Just(10) };
    /// let credited = balance.modify(account, |current| current.map(|n| n + 5));
    /// assert_eq!(credited.balance, Maybe::Just(15));
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`modify`](Lens::modify), but the function reads the focus by
    /// reference, so `A` need not be `Clone`.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let updated = function(self.get(&source));
        self.set(source, updated)
    }

    /// Focuses deeper with a lens on `A`.
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Focuses on one variant of the field, producing an
    /// [`Optional`](super::Optional).
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }

    /// Views this lens as a traversal with exactly one target.
    fn to_traversal(self) -> LensAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// A lens built from a getter and a setter closure.
///
/// Usually produced by [`lens!`](crate::lens).
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from its getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses chained: `S -> A -> B`.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens seen as a [`Traversal`](super::Traversal) with one target.
pub struct LensAsTraversal<L, S, A> {
    pub(crate) lens: L,
    _marker: PhantomData<(S, A)>,
}

impl<L, S, A> LensAsTraversal<L, S, A> {
    /// Wraps `lens`.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<L: Clone, S, A> Clone for LensAsTraversal<L, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.lens.clone())
    }
}

impl<L: std::fmt::Debug, S, A> std::fmt::Debug for LensAsTraversal<L, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensAsTraversal")
            .field("lens", &self.lens)
            .finish()
    }
}

/// Builds a [`FunctionLens`] for a named struct field.
///
/// Accepts a plain type, a generic type (`Wrapper<i32>`) or a path.
///
/// # Examples
///
/// ```
/// use remonad::lens;
/// use remonad::optics::Lens;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let x = lens!(Point, x);
/// assert_eq!(x.set(Point { x: 1, y: 2 }, 9), Point { x: 9, y: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

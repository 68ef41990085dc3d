//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the success payload of a container while keeping
//! its tag. Failure-like variants (`Nothing`, `Left`, `Err`, `StandBy`,
//! `Loading`, `Failure`) pass through untouched and the function is never
//! invoked for them.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::Maybe;
//! use remonad::typeclass::Functor;
//!
//! let some_value = Maybe::Just(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Maybe::Just("5".to_string()));
//!
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(nothing.fmap(|n| n.to_string()), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// 1. **Identity**: `fa.fmap(|x| x) == fa`
/// 2. **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).fmap(|n| n * 2), Maybe::Just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left intact. Containers that carry a failure payload
    /// clone it into the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::typeclass::Functor;
    ///
    /// let name = Maybe::Just("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::Just(5));
    /// assert!(name.is_just());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Maybe;
    /// use remonad::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

//! Tuple type - a fixed pair.
//!
//! `Tuple<A, B>` is a plain product with named accessors. It has no failure
//! state and no short-circuiting, so it implements none of the type classes;
//! it exists as the target of conversions such as [`Either::to_tuple`].
//!
//! [`Either::to_tuple`]: super::Either::to_tuple

use std::fmt;

/// An immutable pair of values.
///
/// # Examples
///
/// ```rust
/// use remonad::control::Tuple;
///
/// let pair = Tuple::of("width", 3).map_second(|n| n * 2);
/// assert_eq!(pair.second(), &6);
/// assert_eq!(pair.swap().to_pair(), (6, "width"));
/// assert_eq!(pair.to_string(), "Tuple(width, 6)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuple<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tuple<A, B> {
    /// Builds a pair.
    #[inline]
    pub const fn of(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Borrows the first element.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Borrows the second element.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Takes the first element, dropping the second.
    #[inline]
    pub fn into_first(self) -> A {
        self.first
    }

    /// Takes the second element, dropping the first.
    #[inline]
    pub fn into_second(self) -> B {
        self.second
    }

    /// Transforms the first element, leaving the second untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Tuple;
    ///
    /// let labelled = Tuple::of("width", 12);
    /// assert_eq!(labelled.map_first(str::len), Tuple::of(5, 12));
    /// ```
    #[inline]
    pub fn map_first<T, F>(self, function: F) -> Tuple<T, B>
    where
        F: FnOnce(A) -> T,
    {
        Tuple::of(function(self.first), self.second)
    }

    /// Transforms the second element.
    #[inline]
    pub fn map_second<T, F>(self, function: F) -> Tuple<A, T>
    where
        F: FnOnce(B) -> T,
    {
        Tuple::of(self.first, function(self.second))
    }

    /// Transforms both elements.
    #[inline]
    pub fn map_both<T, U, F, G>(self, on_first: F, on_second: G) -> Tuple<T, U>
    where
        F: FnOnce(A) -> T,
        G: FnOnce(B) -> U,
    {
        Tuple::of(on_first(self.first), on_second(self.second))
    }

    /// Exchanges the elements.
    #[inline]
    pub fn swap(self) -> Tuple<B, A> {
        Tuple::of(self.second, self.first)
    }

    /// Combines both elements into one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Tuple;
    ///
    /// assert_eq!(Tuple::of(2_i32, 5).fold(|base, exponent| base.pow(exponent)), 32);
    /// ```
    #[inline]
    pub fn fold<T, F>(self, function: F) -> T
    where
        F: FnOnce(A, B) -> T,
    {
        function(self.first, self.second)
    }

    /// Converts to a native tuple.
    #[inline]
    pub fn to_pair(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T> Tuple<T, T> {
    /// Pairs a value with a copy of itself.
    #[inline]
    pub fn double(value: T) -> Self
    where
        T: Clone,
    {
        Self::of(value.clone(), value)
    }

    /// Builds a pair from a two-element array.
    #[inline]
    pub fn from_array([first, second]: [T; 2]) -> Self {
        Self::of(first, second)
    }

    /// Converts to a two-element array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.first, self.second]
    }
}

impl<A, B> From<(A, B)> for Tuple<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::of(first, second)
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    #[inline]
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.to_pair()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Tuple<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Tuple({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_double_and_arrays() {
        let pair = Tuple::double(String::from("x"));
        assert_eq!(pair.first(), pair.second());
        assert_eq!(Tuple::from_array([1, 2]).to_array(), [1, 2]);
    }

    #[rstest]
    fn test_map_both_and_swap() {
        let pair = Tuple::of(1, "one").map_both(|n| n + 1, str::len);
        assert_eq!(pair, Tuple::of(2, 3));
        assert_eq!(pair.swap(), Tuple::of(3, 2));
    }

    #[rstest]
    fn test_native_conversions() {
        let pair: Tuple<i32, char> = (1, 'a').into();
        assert_eq!(pair.into_first(), 1);
        let native: (i32, char) = pair.into();
        assert_eq!(native, (1, 'a'));
        assert_eq!(pair.into_second(), 'a');
    }

    #[rstest]
    #[case(Tuple::of(1, 2), "Tuple(1, 2)")]
    #[case(Tuple::of(-1, 0), "Tuple(-1, 0)")]
    fn test_display(#[case] pair: Tuple<i32, i32>, #[case] expected: &str) {
        assert_eq!(pair.to_string(), expected);
    }
}

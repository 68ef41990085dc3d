//! Small combinators used across the containers.
//!
//! - [`identity`]: returns its argument unchanged; every `join` is
//!   `chain(identity)`
//! - [`constant`]: a function that ignores its input
//! - [`flip`]: swaps the arguments of a binary function, handy before
//!   currying when the wrapped argument should come second

/// The identity function: returns its argument unchanged.
///
/// # Examples
///
/// ```
/// use remonad::compose::identity;
/// use remonad::control::Maybe;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::Just(Maybe::Just(1)).chain(identity), Maybe::Just(1));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use remonad::compose::constant;
/// use remonad::control::Maybe;
///
/// assert_eq!(Maybe::Just(7).map(constant::<_, i32>("seen")), Maybe::Just("seen"));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use remonad::compose::flip;
/// use remonad::control::Maybe;
/// use remonad::curry2;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let minus = curry2!(flip(subtract));
/// assert_eq!(Maybe::Just(minus).apply(Maybe::Just(1)).apply(Maybe::Just(10)), Maybe::Just(9));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn identity_returns_owned_value() {
        let text = String::from("moved");
        assert_eq!(identity(text), "moved");
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn constant_ignores_input(#[case] input: i32) {
        assert_eq!(constant::<_, i32>("fixed")(input), "fixed");
    }

    #[rstest]
    fn double_flip_is_identity() {
        let divide = |numerator: i32, denominator: i32| numerator / denominator;
        let twice = flip(flip(divide));
        assert_eq!(twice(10, 2), divide(10, 2));
        assert_eq!(flip(divide)(2, 10), 5);
    }
}

//! The curry macro family for converting multi-argument functions to curried form.
//!
//! Currying turns `f(a, b, c)` into `f(a)(b)(c)`. This is how a
//! multi-argument function is fed to a container's `apply`, one wrapped
//! argument per call:
//!
//! ```
//! use remonad::control::Maybe;
//! use remonad::curry3;
//!
//! let volume = curry3!(|w: i32, h: i32, d: i32| w * h * d);
//! let result = Maybe::Just(volume)
//!     .apply(Maybe::Just(2))
//!     .apply(Maybe::Just(3))
//!     .apply(Maybe::Just(4));
//! assert_eq!(result, Maybe::Just(24));
//! ```
//!
//! All arities share one recursive builder that carries the list of bound
//! arguments explicitly, so the partial-application state is visible in the
//! expansion rather than recovered from arity reflection. The function and
//! every bound argument live behind `std::sync::Arc`:
//!
//! - every intermediate closure is `Fn` and can be called repeatedly
//! - bound arguments are cloned out on the final call, so they must be `Clone`
//! - the closures are `Send + Sync` when the function and arguments are,
//!   which lets curried functions travel inside a `Task`

/// Builds the nested closures for the `curryN!` macros.
///
/// `$function` names an `Arc` holding the function, the bracketed list holds
/// the names of arguments bound so far (each an `Arc`), and the trailing
/// names are the arguments still to come.
#[doc(hidden)]
#[macro_export]
macro_rules! __curry_build {
    ($function:ident [$($bound:ident)*] $last:ident) => {
        move |$last| {
            $function(
                $(::std::sync::Arc::unwrap_or_clone(::std::sync::Arc::clone(&$bound)),)*
                $last,
            )
        }
    };
    ($function:ident [$($bound:ident)*] $next:ident $($rest:ident)+) => {
        move |$next| {
            let $function = ::std::sync::Arc::clone(&$function);
            $(let $bound = ::std::sync::Arc::clone(&$bound);)*
            let $next = ::std::sync::Arc::new($next);
            $crate::__curry_build!($function [$($bound)* $next] $($rest)+)
        }
    };
}

/// Converts a 2-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use remonad::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_build!(function [] first second)
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use remonad::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// let with_first = curried(1);
/// assert_eq!(with_first(2)(3), 6);
/// assert_eq!(with_first(10)(20), 31);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_build!(function [] first second third)
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use remonad::curry4;
///
/// let curried = curry4!(|a: i32, b: i32, c: i32, d: i32| a * 1000 + b * 100 + c * 10 + d);
/// assert_eq!(curried(1)(2)(3)(4), 1234);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_build!(function [] first second third fourth)
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use remonad::curry5;
///
/// let curried = curry5!(|a: u8, b: u8, c: u8, d: u8, e: u8| [a, b, c, d, e]);
/// assert_eq!(curried(1)(2)(3)(4)(5), [1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_build!(function [] first second third fourth fifth)
    }};
}

/// Converts a 6-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use remonad::curry6;
///
/// let curried = curry6!(|a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f);
/// assert_eq!(curried(1)(2)(3)(4)(5)(6), 21);
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::sync::Arc::new($function);
        $crate::__curry_build!(function [] first second third fourth fifth sixth)
    }};
}

//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] recovers that ability with a GAT: a container applied
//! to `A` names itself applied to any other `B`. Every type class in this
//! crate, and the generic aggregation algorithm, is written against it.
//!
//! # Example
//!
//! ```rust
//! use remonad::control::Maybe;
//! use remonad::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Maybe<String> = empty_like(Maybe::Just(42));
//! assert_eq!(nothing, Maybe::Nothing);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
///   For containers with two parameters this is always the "success" slot:
///   `Result<E, A>` and `RemoteData<E, A>` use `A`, `Either<L, R>` uses `R`.
/// - `WithType<B>`: The same constructor applied to `B`, keeping every other
///   parameter fixed.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, RemoteData, Result};
    use rstest::rstest;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<E, A, B>()
        where
            Result<E, A>: TypeConstructor<Inner = A, WithType<B> = Result<E, B>>,
        {
        }

        assert_result_with_type::<String, i32, bool>();
        assert_result_with_type::<(), Vec<u8>, String>();
    }

    #[test]
    fn either_focuses_on_the_right_slot() {
        fn assert_either_with_type<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_either_with_type::<String, i32, char>();
    }

    #[test]
    fn remote_data_with_type_preserves_error_type() {
        type Step1 = <RemoteData<String, i32> as TypeConstructor>::WithType<bool>;

        fn assert_is_remote_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_remote_bool::<Step1>();
    }

    #[rstest]
    #[case(Maybe::Just(42))]
    #[case(Maybe::Nothing)]
    fn maybe_with_type_inner_roundtrip(#[case] original: Maybe<i32>) {
        fn roundtrip<T>(value: T) -> T::WithType<T::Inner>
        where
            T: TypeConstructor + Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Maybe<i32> = roundtrip(original);
        assert_eq!(result, original);
    }
}

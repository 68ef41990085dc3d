//! Type class traits shared by every container.
//!
//! - [`Functor`]: Mapping over the success payload
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//! - [`ShortCircuit`]: Splitting a container into success or residual, the
//!   capability behind the aggregation functions [`sequence`],
//!   [`sequence_record`], [`successes`], [`first_success`] and [`apply_all`]
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so [`TypeConstructor`] uses a
//! Generic Associated Type to name "the same container at another payload
//! type". All traits above build on it.
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::Maybe;
//! use remonad::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(20);
//! let doubled = lifted.fmap(|n| n * 2);
//! let checked = doubled.flat_map(|n| if n > 0 { Maybe::Just(n + 2) } else { Maybe::Nothing });
//!
//! assert_eq!(checked, Maybe::Just(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod short_circuit;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use short_circuit::{
    ShortCircuit, apply_all, first_success, sequence, sequence_record, successes,
};

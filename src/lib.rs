//! # remonad
//!
//! Tagged-union containers with one shared combinator algebra.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe), [`Either`](control::Either),
//!   [`Result`](control::Result), [`RemoteData`](control::RemoteData) and
//!   [`Tuple`](control::Tuple)
//! - **Task**: a replayable deferred asynchronous computation that always
//!   settles to a [`Result`](control::Result)
//! - **Type Classes**: Functor, Applicative, Monad and `ShortCircuit`, the
//!   capability behind `all`, `some`, `values`, `record` and `apply_all`
//! - **Currying**: `curry2!` through `curry6!` for applicative `apply`
//! - **Optics**: Lens, Prism, Iso, Optional and Traversal
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the generic aggregation algorithm
//! - `compose`: Currying macros and small function helpers
//! - `control`: The synchronous containers
//! - `optics`: Optics over plain structures and [`Maybe`](control::Maybe)
//! - `async`: [`Task`](effect::Task), backed by tokio and futures
//! - `serde`: Serialize/Deserialize for the containers
//! - `tracing`: Span instrumentation for tasks
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use remonad::control::{Maybe, Result};
//!
//! let parsed: Maybe<i32> = Maybe::from_nullable(Some(Some(41)));
//! let next = parsed.map(|value| value + 1).to_result("missing");
//!
//! assert_eq!(next, Result::Ok(42));
//! assert_eq!(next.to_string(), "Ok(42)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers and traits. The crate's [`Result`](control::Result)
/// is deliberately left out so a glob import never shadows
/// `std::result::Result`; import it from [`control`] by name.
///
/// # Usage
///
/// ```rust
/// use remonad::prelude::*;
///
/// assert_eq!(Maybe::Just(2).map(|n| n * 21), Maybe::Just(42));
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::{Either, Maybe, RemoteData, Tuple};

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "async")]
pub mod effect;

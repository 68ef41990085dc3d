//! Synchronous containers.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: one of two values, right biased
//! - [`Result`]: a value or a typed error
//! - [`RemoteData`]: the four-state lifecycle of a remote fetch
//! - [`Tuple`]: a fixed pair, the target of [`Either::to_tuple`]
//!
//! Every container except `Tuple` shares the same combinator vocabulary
//! (`map`, `chain`, `join`, `apply`, `fold`, `or`, `or_else`,
//! `with_default`, `get_or_else`) and the same aggregation functions
//! (`all`, `some`, `values`, `record`, `apply_all`), all backed by
//! [`ShortCircuit`](crate::typeclass::ShortCircuit).
//!
//! # Examples
//!
//! ## Converting between containers
//!
//! ```rust
//! use remonad::control::{Either, Maybe, RemoteData, Result};
//!
//! let found = Maybe::find(vec![3, 8, 11], |n| n % 2 == 0);
//! let result: Result<&str, i32> = found.to_result("no even number");
//! let state = RemoteData::from_result(result);
//!
//! assert_eq!(state, RemoteData::Success(8));
//! assert_eq!(result.to_either(), Either::Right(8));
//! ```
//!
//! ## Aggregation
//!
//! ```rust
//! use remonad::control::Result;
//!
//! let inputs = ["1", "2", "x", "y"];
//! let parsed = inputs
//!     .iter()
//!     .map(|text| Result::from(text.parse::<i32>().map_err(|_| format!("bad input: {text}"))));
//!
//! assert_eq!(Result::all(parsed), Result::Err("bad input: x".to_string()));
//! ```

mod either;
mod maybe;
mod remote_data;
mod result;
mod tuple;

pub use either::Either;
pub use maybe::Maybe;
pub use remote_data::RemoteData;
pub use result::Result;
pub use tuple::Tuple;

//! Function helpers for applicative style.
//!
//! # Overview
//!
//! - [`curry2!`] through [`curry6!`]: convert multi-argument functions to
//!   curried form, the shape every container's `apply` consumes
//! - [`identity`], [`constant`], [`flip`]: small combinators
//!
//! # Examples
//!
//! ```
//! use remonad::control::Result;
//! use remonad::curry2;
//!
//! fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}") }
//!
//! let greeting: Result<String, _> = Result::Ok(curry2!(greet))
//!     .apply(Result::Ok("Hello"))
//!     .apply(Result::Ok("world"));
//! assert_eq!(greeting, Result::Ok("Hello, world".to_string()));
//! ```

mod curry_macro;
mod utils;

pub use utils::{constant, flip, identity};

// Re-export macros at module level for discoverability.
pub use crate::{curry2, curry3, curry4, curry5, curry6};

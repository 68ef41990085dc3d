//! Optics for reading and updating parts of immutable structures.
//!
//! - [`Lens`]: exactly one focus, always present
//! - [`Prism`]: one variant of an enum, looked up as a [`Maybe`](crate::control::Maybe)
//! - [`Iso`]: a lossless conversion between two representations
//! - [`Optional`]: a focus that may be absent, e.g. a lens followed by a prism
//! - [`Traversal`]: zero or more foci
//!
//! Every optic composes with another of its kind through `compose`. A lens
//! or prism can widen into a traversal with `to_traversal`, and
//! [`Lens::compose_prism`] yields an optional.
//!
//! # Examples
//!
//! ```
//! use remonad::control::{Maybe, RemoteData};
//! use remonad::optics::{Lens, Optional};
//! use remonad::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Page {
//!     title: String,
//!     comments: RemoteData<String, Vec<String>>,
//! }
//!
//! let loaded = lens!(Page, comments)
//!     .compose_prism(prism!(RemoteData<String, Vec<String>>, Success));
//!
//! let page = Page {
//!     title: "Release notes".to_string(),
//!     comments: RemoteData::Success(vec!["nice".to_string()]),
//! };
//!
//! assert_eq!(loaded.get_option(&page).map(Vec::len), Maybe::Just(1));
//!
//! let updated = loaded.modify(page, |mut comments| {
//!     comments.push("+1".to_string());
//!     comments
//! });
//! assert_eq!(updated.comments.get_data().map(|c| c.len()), Maybe::Just(2));
//! ```

mod iso;
mod lens;
mod optional;
mod prism;
mod traversal;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsTraversal;

pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismAsTraversal;

pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::LensPrismComposition;
pub use optional::Optional;
pub use optional::PrismAsOptional;

pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::ReversedIso;

pub use traversal::ComposedTraversal;
pub use traversal::JustTraversal;
pub use traversal::MaybeTraversal;
pub use traversal::RecordTraversal;
pub use traversal::Traversal;
pub use traversal::VecTraversal;

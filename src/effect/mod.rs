//! Deferred asynchronous computations.
//!
//! - [`Task`]: a replayable computation that settles to a
//!   [`Result`](crate::control::Result)
//! - [`TaskPanic`]: the error a panic becomes under [`Task::attempt`]
//!
//! Tasks are backed by `futures::future::BoxFuture` and are `Send`, so they
//! can be forked on a multi-threaded tokio runtime. With the `tracing`
//! feature, [`Task::instrument`] runs every fork inside a span.

mod error;
mod task;

pub use error::TaskPanic;
pub use task::Task;

//! `Task` - a replayable deferred asynchronous computation.
//!
//! A `Task<E, A>` describes an asynchronous computation that settles to a
//! [`Result<E, A>`](crate::control::Result). Building a task does no work;
//! [`Task::fork`] starts the computation and every call starts it again
//! from scratch. A task is a recipe, not a running operation, so nothing is
//! memoized.
//!
//! # Design Philosophy
//!
//! `fork` never fails outside the `Result`: an executor's `Err` is encased
//! as `Result::Err`, and [`Task::attempt`] additionally turns a panic into an
//! error through [`TaskPanic`].
//!
//! Combinators compose strictly sequentially (`chain` forks the next task
//! only after the previous one settled). The aggregation functions
//! [`Task::all`], [`Task::record`] and [`Task::apply_all`] fork every member
//! at once and poll them concurrently; the outcome still reports the first
//! error by input position, never by completion time.
//!
//! # Examples
//!
//! ```rust
//! use remonad::control::Result;
//! use remonad::effect::Task;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let task: Task<String, i32> = Task::of(|| async { Ok(20) })
//!         .map(|n| n + 1)
//!         .chain(|n| Task::resolve(n * 2));
//!
//!     assert_eq!(task.fork().await, Result::Ok(42));
//!     // Forking again runs the computation again.
//!     assert_eq!(task.fork().await, Result::Ok(42));
//! }
//! ```

use std::fmt;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, join, join_all};
use indexmap::IndexMap;

use super::error::TaskPanic;
use crate::control::Result;

type Computation<E, A> = dyn Fn() -> BoxFuture<'static, Result<E, A>> + Send + Sync;

/// A deferred asynchronous computation that settles to `Result<E, A>`.
///
/// Cloning a task is cheap: clones share the same computation.
///
/// # Type Parameters
///
/// - `E`: The error type.
/// - `A`: The success type.
pub struct Task<E, A> {
    computation: Arc<Computation<E, A>>,
}

static_assertions::assert_impl_all!(Task<String, i32>: Send, Sync, Clone);

impl<E, A> Clone for Task<E, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<E: Send + 'static, A: Send + 'static> Task<E, A> {
    /// Creates a task from a function producing a future of `Result<E, A>`.
    ///
    /// The function is called once per [`fork`](Task::fork).
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<E, A>> + Send + 'static,
    {
        Self {
            computation: Arc::new(move || computation().boxed()),
        }
    }

    /// Creates a task from an executor returning a standard `Result`.
    ///
    /// `Ok` and `Err` are encased into the crate's [`Result`]. A panic in
    /// `executor` or its future is not caught and propagates out of
    /// [`fork`](Task::fork); use [`Task::attempt`] to settle it to `Err`.
    pub fn of<F, Fut>(executor: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<A, E>> + Send + 'static,
    {
        Self::new(move || executor().map(Result::from))
    }

    /// Like [`Task::of`], and also captures panics.
    ///
    /// A panic raised while calling `executor` or while polling the future
    /// it returned settles the task to `Err(E::from(TaskPanic))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::effect::{Task, TaskPanic};
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let task: Task<TaskPanic, i32> = Task::attempt(|| async {
    ///         let values: Vec<i32> = Vec::new();
    ///         Ok(values[3])
    ///     });
    ///     assert!(task.fork().await.is_err());
    /// }
    /// ```
    pub fn attempt<F, Fut>(executor: F) -> Self
    where
        E: From<TaskPanic>,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<A, E>> + Send + 'static,
    {
        Self::new(move || {
            let started = panic::catch_unwind(AssertUnwindSafe(|| executor()))
                .map_err(|payload| TaskPanic::from_payload(payload.as_ref()));
            async move {
                let future = match started {
                    Ok(future) => future,
                    Err(panic) => return settle_panic(panic),
                };
                match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(result) => Result::from(result),
                    Err(payload) => settle_panic(TaskPanic::from_payload(payload.as_ref())),
                }
            }
        })
    }

    /// A task that settles to `Ok(value)`.
    pub fn resolve(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move || futures::future::ready(Result::Ok(value.clone())))
    }

    /// A task that settles to `Err(error)`.
    pub fn reject(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move || futures::future::ready(Result::Err(error.clone())))
    }

    /// A task that settles to `result`.
    pub fn from_result(result: Result<E, A>) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::new(move || futures::future::ready(result.clone()))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Starts the computation.
    ///
    /// Every call runs the computation again.
    pub fn fork(&self) -> BoxFuture<'static, Result<E, A>> {
        (self.computation)()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the success value. An error passes through and the
    /// function is not called.
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let source = self.fork();
            let function = Arc::clone(&function);
            async move { source.await.map(|value| function(value)) }
        })
    }

    /// Transforms the error.
    pub fn map_error<T, F>(self, function: F) -> Task<T, A>
    where
        T: Send + 'static,
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let source = self.fork();
            let function = Arc::clone(&function);
            async move { source.await.map_error(|error| function(error)) }
        })
    }

    /// Runs the task produced from the success value.
    ///
    /// The next task is forked only after this one settled, and only when it
    /// settled to `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    /// use remonad::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let failed: Task<&str, i32> = Task::reject("no user");
    ///     let chained = failed.chain(|_| -> Task<&str, i32> { panic!("not called") });
    ///     assert_eq!(chained.fork().await, Result::Err("no user"));
    /// }
    /// ```
    pub fn chain<B, F>(self, function: F) -> Task<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> Task<E, B> + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let source = self.fork();
            let function = Arc::clone(&function);
            async move {
                match source.await {
                    Result::Ok(value) => function(value).fork().await,
                    Result::Err(error) => Result::Err(error),
                }
            }
        })
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Forks every task concurrently and collects the values in input order.
    ///
    /// The first error by position wins, whichever task failed first in time.
    pub fn all<I>(tasks: I) -> Task<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Vec<Self> = tasks.into_iter().collect();
        Task::new(move || {
            let forks = join_all(tasks.iter().map(Self::fork));
            async move { Result::all(forks.await) }
        })
    }

    /// Alias of [`Task::all`].
    pub fn array<I>(tasks: I) -> Task<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        Self::all(tasks)
    }

    /// Keyed version of [`Task::all`]; key order is preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    /// use remonad::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let record = Task::record(vec![
    ///         ("a", Task::resolve(1)),
    ///         ("b", Task::reject("boom")),
    ///         ("c", Task::resolve(3)),
    ///     ]);
    ///     assert_eq!(record.fork().await.get_error().get(), Some("boom"));
    /// }
    /// ```
    pub fn record<K, I>(entries: I) -> Task<E, IndexMap<K, A>>
    where
        K: Hash + Eq + Clone + Send + Sync + 'static,
        I: IntoIterator<Item = (K, Self)>,
    {
        let entries: Vec<(K, Self)> = entries.into_iter().collect();
        Task::new(move || {
            let (keys, forks): (Vec<K>, Vec<_>) = entries
                .iter()
                .map(|(key, task)| (key.clone(), task.fork()))
                .unzip();
            let joined = join_all(forks);
            async move { Result::record(keys.into_iter().zip(joined.await)) }
        })
    }

    /// [`Task::all`] followed by `function` over the collected values.
    pub fn apply_all<B, F, I>(function: F, tasks: I) -> Task<E, B>
    where
        B: Send + 'static,
        F: Fn(Vec<A>) -> B + Send + Sync + 'static,
        I: IntoIterator<Item = Self>,
    {
        Self::all(tasks).map(function)
    }

    /// Runs every fork inside `span`.
    #[cfg(feature = "tracing")]
    pub fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        Self::new(move || self.fork().instrument(span.clone()))
    }
}

impl<E: Send + 'static> Task<E, ()> {
    /// A task that settles to `Ok(())` once `duration` has elapsed.
    pub fn sleep(duration: Duration) -> Self {
        Self::new(move || async move {
            tokio::time::sleep(duration).await;
            Result::Ok(())
        })
    }
}

impl<E: Send + 'static, F: Send + 'static> Task<E, F> {
    /// Applies the function this task yields to the value `argument` yields.
    ///
    /// Both tasks are forked together. An error from the function task wins
    /// over one from the argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use remonad::control::Result;
    /// use remonad::curry2;
    /// use remonad::effect::Task;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let add = Task::<String, _>::new(|| async { Result::Ok(curry2!(|a: i32, b: i32| a + b)) });
    ///     let sum = add.apply(Task::resolve(1)).apply(Task::resolve(2));
    ///     assert_eq!(sum.fork().await, Result::Ok(3));
    /// }
    /// ```
    pub fn apply<A, B>(self, argument: Task<E, A>) -> Task<E, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B,
    {
        Task::new(move || {
            let both = join(self.fork(), argument.fork());
            async move {
                let (function, value) = both.await;
                function.apply(value)
            }
        })
    }
}

fn settle_panic<E: From<TaskPanic>, A>(panic: TaskPanic) -> Result<E, A> {
    #[cfg(feature = "tracing")]
    tracing::warn!(panic = %panic.message, "task panicked, settling to Err");
    Result::Err(E::from(panic))
}

impl<E, A> fmt::Display for Task<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

impl<E, A> fmt::Debug for Task<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    enum AppError {
        Panicked(String),
        Invalid,
    }

    impl From<TaskPanic> for AppError {
        fn from(panic: TaskPanic) -> Self {
            Self::Panicked(panic.message)
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_construction_is_lazy_and_fork_replays() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let task: Task<(), usize> = Task::new(move || {
            let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Result::Ok(count) }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(task.fork().await, Result::Ok(1));
        assert_eq!(task.fork().await, Result::Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_of_encases_err() {
        let task: Task<AppError, i32> = Task::of(|| async { Err(AppError::Invalid) });
        assert_eq!(task.fork().await, Result::Err(AppError::Invalid));
    }

    #[rstest]
    #[tokio::test]
    #[should_panic(expected = "not settled")]
    async fn test_of_lets_executor_panic_escape_fork() {
        let task: Task<AppError, i32> = Task::of(|| async {
            if true {
                panic!("not settled");
            }
            Ok(1)
        });
        let _ = task.fork().await;
    }

    #[rstest]
    #[tokio::test]
    async fn test_attempt_catches_synchronous_panic() {
        let task: Task<AppError, i32> =
            Task::attempt(|| -> futures::future::Ready<std::result::Result<i32, AppError>> {
                panic!("sync boom")
            });
        assert_eq!(
            task.fork().await,
            Result::Err(AppError::Panicked("sync boom".to_string()))
        );
    }

    fn explode(code: i32) -> std::result::Result<i32, AppError> {
        panic!("async boom {code}")
    }

    #[rstest]
    #[tokio::test]
    async fn test_attempt_catches_panic_while_polling() {
        let task: Task<AppError, i32> = Task::attempt(|| async {
            tokio::task::yield_now().await;
            explode(7)
        });
        assert_eq!(
            task.fork().await,
            Result::Err(AppError::Panicked("async boom 7".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_skips_function_on_error() {
        let task: Task<&str, i32> = Task::reject("e");
        let mapped = task.map(|_| -> i32 { panic!("must not be called") });
        assert_eq!(mapped.fork().await, Result::Err("e"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_error() {
        let task: Task<&str, i32> = Task::reject("e");
        assert_eq!(task.map_error(str::len).fork().await, Result::Err(1));
    }

    #[rstest]
    #[tokio::test]
    async fn test_all_reports_first_error_by_position() {
        let slow_failure: Task<&str, i32> =
            Task::sleep(Duration::from_millis(50)).chain(|()| Task::reject("first"));
        let fast_failure: Task<&str, i32> = Task::reject("second");

        let combined = Task::all(vec![Task::resolve(0), slow_failure, fast_failure]);
        assert_eq!(combined.fork().await, Result::Err("first"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_all_empty_and_ordered() {
        assert_eq!(Task::<(), i32>::all(vec![]).fork().await, Result::Ok(vec![]));

        let ordered = Task::<(), i32>::array(vec![
            Task::sleep(Duration::from_millis(20)).map(|()| 1),
            Task::resolve(2),
        ]);
        assert_eq!(ordered.fork().await, Result::Ok(vec![1, 2]));
    }

    #[rstest]
    #[tokio::test]
    async fn test_apply_all() {
        let total = Task::<(), i32>::apply_all(
            |values: Vec<i32>| values.iter().sum::<i32>(),
            vec![Task::resolve(1), Task::resolve(2)],
        );
        assert_eq!(total.fork().await, Result::Ok(3));
    }

    #[rstest]
    fn test_display() {
        let task: Task<(), i32> = Task::resolve(1);
        assert_eq!(task.to_string(), "<Task>");
        assert_eq!(format!("{task:?}"), "Task { .. }");
    }
}
